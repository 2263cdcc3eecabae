use crate::{
    eligibility::Threshold,
    error::Result,
    extractors::{Json, Path, ValidatedJson},
    store::{ExamChanges, ExamStore},
    utils::{parse_date, parse_subject},
    StateTrait,
};
use axum::extract::State;
use entity::exams;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 1, max = 100))]
    name: Option<String>,
    subject: Option<String>,
    date: Option<String>,
    #[validate(range(min = 1, max = 8))]
    semester: Option<i16>,
    #[validate(range(min = 1, max = 12))]
    month: Option<i16>,
    #[validate(range(min = 2000, max = 2100))]
    year: Option<i32>,
    attendance_threshold: Option<f64>,
}

pub async fn update_exam<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<exams::Model>> {
    let changes = ExamChanges {
        name: request.name.map(|name| name.trim().to_owned()),
        subject: parse_subject(request.subject.as_deref())?,
        date: request.date.as_deref().map(parse_date).transpose()?,
        semester: request.semester,
        month: request.month,
        year: request.year,
        attendance_threshold: request
            .attendance_threshold
            .map(Threshold::new)
            .transpose()?,
    };

    let exam = ExamStore::new(state.db()).update(id, changes).await?;

    Ok(Json(exam))
}
