use crate::{
    error::Result,
    extractors::{Json, Query},
    store::{AttendanceFilter, AttendanceStore},
    utils::{parse_date, parse_subject},
    StateTrait,
};
use axum::extract::State;
use entity::attendance;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    date: Option<String>,
    student: Option<Uuid>,
    subject: Option<String>,
}

pub async fn list_attendance<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<attendance::Model>>> {
    let filter = AttendanceFilter {
        date: params.date.as_deref().map(parse_date).transpose()?,
        student: params.student,
        subject: parse_subject(params.subject.as_deref())?,
    };

    let records = AttendanceStore::new(state.db()).find(filter).await?;

    Ok(Json(records))
}
