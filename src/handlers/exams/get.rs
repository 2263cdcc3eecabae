use crate::{
    error::Result,
    extractors::{Json, Path, Query},
    jwt::Claims,
    store::{ExamFilter, ExamStore},
    utils::parse_subject,
    StateTrait,
};
use axum::extract::State;
use entity::exams;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    subject: Option<String>,
    month: Option<i16>,
    year: Option<i32>,
}

pub async fn list_exams<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Query(params): Query<Params>,
) -> Result<Json<Vec<exams::Model>>> {
    let filter = ExamFilter {
        subject: parse_subject(params.subject.as_deref())?,
        month: params.month,
        year: params.year,
    };

    let exams = ExamStore::new(state.db()).list(filter).await?;

    Ok(Json(exams))
}

pub async fn get_exam<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    Path(id): Path<Uuid>,
) -> Result<Json<exams::Model>> {
    let exam = ExamStore::new(state.db()).find(id).await?;

    Ok(Json(exam))
}
