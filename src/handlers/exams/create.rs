use crate::{
    eligibility::Threshold,
    error::Result,
    extractors::{Json, ValidatedJson},
    store::{ExamStore, NewExam},
    utils::parse_date,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{exams, Subject};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 1, max = 100))]
    name: String,
    subject: String,
    date: String,
    #[validate(range(min = 1, max = 8))]
    semester: i16,
    #[validate(range(min = 1, max = 12))]
    month: i16,
    #[validate(range(min = 2000, max = 2100))]
    year: i32,
    attendance_threshold: Option<f64>,
}

pub async fn create_exam<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<exams::Model>)> {
    let attendance_threshold = request
        .attendance_threshold
        .map(Threshold::new)
        .transpose()?
        .unwrap_or_default();

    let exam = ExamStore::new(state.db())
        .create(NewExam {
            name: request.name.trim().to_owned(),
            subject: request.subject.parse::<Subject>()?,
            date: parse_date(&request.date)?,
            semester: request.semester,
            month: request.month,
            year: request.year,
            attendance_threshold,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(exam)))
}
