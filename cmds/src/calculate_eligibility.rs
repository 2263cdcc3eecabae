use attendance_backend::{
    connect_database,
    eligibility::{batch, batch::Selection, Threshold},
};
use clap::Parser;
use cmds::{log_report, parse_selection, parse_subjects};
use entity::Subject;
use std::process::ExitCode;
use tracing::error;
use uuid::Uuid;

/// Recalculates exam eligibility for one month, creating missing exams.
#[derive(Parser, Debug)]
struct Args {
    /// Month, 1-12.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: u32,

    #[arg(long, value_parser = clap::value_parser!(i32).range(2000..=2100))]
    year: i32,

    /// Threshold for exams created by this run.
    #[arg(long, default_value_t = 70.0)]
    threshold: f64,

    /// `all` or comma separated student ids.
    #[arg(long, default_value = "all", value_parser = parse_selection::<Uuid>)]
    students: Selection<Uuid>,

    /// `all` or comma separated subject names.
    #[arg(long, default_value = "all", value_parser = parse_subjects)]
    subjects: Selection<Subject>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cmds::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let threshold = Threshold::new(args.threshold)?;
    let db = connect_database().await?;

    let report = batch::calculate_month(
        &db,
        args.year,
        args.month,
        threshold,
        args.students,
        args.subjects,
    )
    .await?;

    log_report(&report);

    if !report.report.failures.is_empty() {
        anyhow::bail!("{} pairs failed", report.report.failures.len());
    }

    Ok(())
}
