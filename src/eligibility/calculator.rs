use super::{summarize, AttendanceSummary, Threshold, Window};
use crate::{
    error::Result,
    store::{
        assessment_window, AssessmentStore, AttendanceStore, EligibilityStore, Upserted,
        UserStore,
    },
};
use entity::{assessments, eligibility, exams, Subject};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use uuid::Uuid;

/// A (student, exam) pair the batch could not calculate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub student: Uuid,
    pub exam: Uuid,
    pub subject: Subject,
    pub code: &'static str,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub created: usize,
    pub updated: usize,
    pub results: Vec<eligibility::Model>,
    pub failures: Vec<BatchFailure>,
}

/// Summary of one assessment for one student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEligibility {
    pub assessment: assessments::Model,
    pub threshold: f64,
    #[serde(flatten)]
    pub summary: AttendanceSummary,
}

pub struct EligibilityCalculator<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EligibilityCalculator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Read-only summary of `student` over `window`.
    pub async fn stats(
        &self,
        student: Uuid,
        subject: Option<Subject>,
        window: Window,
        threshold: Threshold,
    ) -> Result<AttendanceSummary> {
        let records = AttendanceStore::new(self.db)
            .find_in_window(student, subject, window)
            .await?;

        Ok(summarize(
            records.into_iter().map(|record| record.status),
            threshold,
        ))
    }

    /// Read-only summary of `student` over the window and against the threshold of an
    /// assessment.
    pub async fn for_assessment(
        &self,
        student: Uuid,
        assessment: &assessments::Model,
    ) -> Result<AssessmentEligibility> {
        let (window, threshold) = assessment_window(assessment)?;
        let summary = self.stats(student, None, window, threshold).await?;

        Ok(AssessmentEligibility {
            assessment: assessment.clone(),
            threshold: threshold.value(),
            summary,
        })
    }

    pub async fn for_assessment_id(
        &self,
        student: Uuid,
        assessment: Uuid,
    ) -> Result<AssessmentEligibility> {
        let assessment = AssessmentStore::new(self.db).find(assessment).await?;
        self.for_assessment(student, &assessment).await
    }

    /// Computes `student` against the subject, month and threshold of `exam` and stores the
    /// result.
    pub async fn calculate(
        &self,
        student: Uuid,
        exam: &exams::Model,
    ) -> Result<Upserted<eligibility::Model>> {
        UserStore::new(self.db).find_student(student).await?;

        let window = Window::month(exam.year, u32::try_from(exam.month).unwrap_or(0))?;
        let threshold = Threshold::new(exam.attendance_threshold)?;

        let summary = self
            .stats(student, Some(exam.subject), window, threshold)
            .await?;

        EligibilityStore::new(self.db)
            .upsert(student, exam.id, exam.subject, summary)
            .await
    }

    /// Runs [`Self::calculate`] for every student and exam pair. A failing pair is recorded in
    /// the report and does not stop the others.
    pub async fn calculate_batch(&self, students: &[Uuid], exams: &[exams::Model]) -> BatchReport {
        let mut report = BatchReport::default();

        for exam in exams {
            for &student in students {
                match self.calculate(student, exam).await {
                    Ok(Upserted::Created(record)) => {
                        report.created += 1;
                        report.results.push(record);
                    }
                    Ok(Upserted::Updated(record)) => {
                        report.updated += 1;
                        report.results.push(record);
                    }
                    Err(error) => {
                        warn!(
                            "eligibility of {student} for exam {} failed: {error}",
                            exam.id
                        );

                        report.failures.push(BatchFailure {
                            student,
                            exam: exam.id,
                            subject: exam.subject,
                            code: error.code(),
                            error: error.message().to_owned(),
                        });
                    }
                }
            }
        }

        debug!(
            "batch finished: {} created, {} updated, {} failed",
            report.created,
            report.updated,
            report.failures.len()
        );

        report
    }
}
