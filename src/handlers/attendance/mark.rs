use crate::{
    error::Result,
    extractors::Json,
    jwt::Claims,
    store::{AttendanceStore, Mark, Upserted},
    utils::parse_date,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::{
    attendance::{self, Status},
    Subject,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Request {
    student: Uuid,
    date: String,
    subject: String,
    status: Status,
}

pub async fn mark_attendance<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Json(request): Json<Request>,
) -> Result<(StatusCode, Json<attendance::Model>)> {
    let mark = Mark {
        student: request.student,
        date: parse_date(&request.date)?,
        subject: request.subject.parse::<Subject>()?,
        status: request.status,
        marked_by: claims.sub,
    };

    let res = AttendanceStore::new(state.db()).mark(mark).await?;

    Ok(match res {
        Upserted::Created(record) => (StatusCode::CREATED, Json(record)),
        Upserted::Updated(record) => (StatusCode::OK, Json(record)),
    })
}
