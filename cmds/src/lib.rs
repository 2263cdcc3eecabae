//! Shared setup for the operator commands.

use attendance_backend::eligibility::batch::{MonthReport, Selection};
use entity::Subject;
use std::str::FromStr;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();
}

/// Parses `all` or a comma separated list.
pub fn parse_selection<T>(value: &str) -> Result<Selection<T>, T::Err>
where
    T: FromStr,
{
    if value.eq_ignore_ascii_case("all") {
        return Ok(Selection::All);
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(T::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map(Selection::Only)
}

pub fn parse_subjects(value: &str) -> Result<Selection<Subject>, String> {
    parse_selection(value).map_err(|error: entity::UnknownSubject| error.to_string())
}

pub fn log_report(report: &MonthReport) {
    info!(
        "{}/{}: {} exams created, {} records created, {} updated, {} failed",
        report.month,
        report.year,
        report.exams_created,
        report.report.created,
        report.report.updated,
        report.report.failures.len()
    );

    for failure in &report.report.failures {
        warn!(
            "student {} / {}: {} ({})",
            failure.student, failure.subject, failure.error, failure.code
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn all_selects_everything() {
        assert_eq!(parse_selection::<Uuid>("all"), Ok(Selection::All));
        assert_eq!(parse_subjects("ALL"), Ok(Selection::All));
    }

    #[test]
    fn comma_separated_subjects() {
        assert_eq!(
            parse_subjects("Data Science, Machine Learning"),
            Ok(Selection::Only(vec![
                Subject::DataScience,
                Subject::MachineLearning
            ]))
        );
        assert!(parse_subjects("Data Science,Alchemy").is_err());
    }

    #[test]
    fn comma_separated_ids() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_selection::<Uuid>(&format!("{id},")),
            Ok(Selection::Only(vec![id]))
        );
        assert!(parse_selection::<Uuid>("not-a-uuid").is_err());
    }
}
