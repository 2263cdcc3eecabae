use crate::{
    eligibility::{summarize, AssessmentEligibility, EligibilityCalculator, Threshold},
    error::Result,
    extractors::{Json, Path, Query},
    jwt::Claims,
    store::{AssessmentStore, AttendanceStore, UserStore},
    utils::parse_subject,
    StateTrait,
};
use axum::extract::State;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    subject: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    total_days: i64,
    present_days: i64,
    absent_days: i64,
    attendance_percentage: f64,
    eligibility: Vec<AssessmentEligibility>,
}

/// Overall attendance of a student plus the verdict for every upcoming assessment. Nothing is
/// written.
pub async fn get_stats<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(student): Path<Uuid>,
    Query(params): Query<Params>,
) -> Result<Json<Response>> {
    claims.ensure_self_or_teacher(student)?;

    let subject = parse_subject(params.subject.as_deref())?;
    let db = state.db();

    UserStore::new(db).find_student(student).await?;

    let records = AttendanceStore::new(db)
        .find_for_student(student, subject)
        .await?;
    let overall = summarize(
        records.into_iter().map(|record| record.status),
        Threshold::DEFAULT,
    );

    let calculator = EligibilityCalculator::new(db);
    let assessments = AssessmentStore::new(db)
        .upcoming(Utc::now().date_naive())
        .await?;

    let mut eligibility = Vec::with_capacity(assessments.len());
    for assessment in &assessments {
        eligibility.push(calculator.for_assessment(student, assessment).await?);
    }

    Ok(Json(Response {
        total_days: overall.total_classes,
        present_days: overall.attended_classes,
        absent_days: overall.absent_classes(),
        attendance_percentage: overall.attendance_percentage,
        eligibility,
    }))
}
