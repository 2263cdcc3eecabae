//! Month-wide recalculation used by the operator commands.

use super::{BatchReport, EligibilityCalculator, Threshold};
use crate::{
    error::Result,
    store::{AttendanceStore, ExamStore, Found, UserStore},
};
use entity::Subject;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(Vec<T>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub exams_created: usize,
    #[serde(flatten)]
    pub report: BatchReport,
}

/// Makes sure every selected subject has an exam in the given month, then recalculates every
/// selected student against those exams.
pub async fn calculate_month<C>(
    db: &C,
    year: i32,
    month: u32,
    threshold: Threshold,
    students: Selection<Uuid>,
    subjects: Selection<Subject>,
) -> Result<MonthReport>
where
    C: ConnectionTrait,
{
    let students = match students {
        Selection::All => UserStore::new(db).student_ids().await?,
        Selection::Only(students) => students,
    };

    let subjects = match subjects {
        Selection::All => Subject::all(),
        Selection::Only(subjects) => subjects,
    };

    let exam_store = ExamStore::new(db);
    let mut exams = Vec::with_capacity(subjects.len());
    let mut exams_created = 0;

    for subject in subjects {
        match exam_store
            .get_or_create(subject, month, year, threshold)
            .await?
        {
            Found::Existing(exam) => exams.push(exam),
            Found::Created(exam) => {
                exams_created += 1;
                exams.push(exam);
            }
        }
    }

    info!(
        "calculating eligibility for {month}/{year}: {} students, {} exams",
        students.len(),
        exams.len()
    );

    let report = EligibilityCalculator::new(db)
        .calculate_batch(&students, &exams)
        .await;

    Ok(MonthReport {
        year,
        month,
        exams_created,
        report,
    })
}

/// Runs [`calculate_month`] for every month that has attendance, with all students, all
/// subjects and the default threshold.
pub async fn calculate_all<C>(db: &C) -> Result<Vec<MonthReport>>
where
    C: ConnectionTrait,
{
    let months = AttendanceStore::new(db).months_with_records().await?;

    info!("found attendance in {} months", months.len());

    let mut reports = Vec::with_capacity(months.len());

    for (year, month) in months {
        let report = calculate_month(
            db,
            year,
            month,
            Threshold::DEFAULT,
            Selection::All,
            Selection::All,
        )
        .await?;

        reports.push(report);
    }

    Ok(reports)
}
