use crate::{
    eligibility::{BatchReport, EligibilityCalculator},
    error::Result,
    extractors::{Json, Path},
    jwt::Claims,
    store::{EligibilityStore, ExamStore, UserStore},
    StateTrait,
};
use axum::extract::State;
use chrono::{DateTime, Utc};
use entity::{eligibility, exams, users, Subject};
use serde::Serialize;
use std::slice;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: Uuid,
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    usn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    semester: Option<i16>,
}

impl From<users::Model> for Student {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            usn: user.usn,
            section: user.section,
            semester: user.semester,
        }
    }
}

/// An eligibility record with its reference expanded.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expanded<U, E> {
    id: Uuid,
    student: U,
    exam: E,
    subject: Subject,
    is_eligible: bool,
    attendance_percentage: f64,
    total_classes: i64,
    attended_classes: i64,
    calculated_at: DateTime<Utc>,
}

impl<U, E> Expanded<U, E> {
    fn new(record: eligibility::Model, student: U, exam: E) -> Self {
        Self {
            id: record.id,
            student,
            exam,
            subject: record.subject,
            is_eligible: record.is_eligible,
            attendance_percentage: record.attendance_percentage,
            total_classes: record.total_classes,
            attended_classes: record.attended_classes,
            calculated_at: record.calculated_at,
        }
    }
}

pub async fn get_exam_eligibility<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Expanded<Student, Uuid>>>> {
    let db = state.db();

    ExamStore::new(db).find(id).await?;

    let records = EligibilityStore::new(db).find_for_exam(id).await?;

    Ok(Json(
        records
            .into_iter()
            .filter_map(|(record, student)| {
                let student = Student::from(student?);
                let exam = record.exam;
                Some(Expanded::new(record, student, exam))
            })
            .collect(),
    ))
}

/// Recalculates every student against the exam.
pub async fn calculate_eligibility<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<Json<BatchReport>> {
    let db = state.db();

    let exam = ExamStore::new(db).find(id).await?;
    let students = UserStore::new(db).student_ids().await?;

    let report = EligibilityCalculator::new(db)
        .calculate_batch(&students, slice::from_ref(&exam))
        .await;

    info!(
        "calculated eligibility for exam {}: {} records, {} failures",
        exam.id,
        report.results.len(),
        report.failures.len()
    );

    Ok(Json(report))
}

pub async fn get_student_eligibility<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(student): Path<Uuid>,
) -> Result<Json<Vec<Expanded<Uuid, exams::Model>>>> {
    claims.ensure_self_or_teacher(student)?;

    let records = EligibilityStore::new(state.db())
        .find_for_student(student)
        .await?;

    Ok(Json(
        records
            .into_iter()
            .filter_map(|(record, exam)| {
                let exam = exam?;
                let student = record.student;
                Some(Expanded::new(record, student, exam))
            })
            .collect(),
    ))
}
