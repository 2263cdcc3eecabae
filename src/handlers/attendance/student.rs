use crate::{
    error::Result,
    extractors::{Json, Path, Query},
    jwt::Claims,
    store::AttendanceStore,
    utils::parse_subject,
    StateTrait,
};
use axum::extract::State;
use entity::attendance;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    subject: Option<String>,
}

pub async fn get_student_attendance<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(student): Path<Uuid>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<attendance::Model>>> {
    claims.ensure_self_or_teacher(student)?;

    let subject = parse_subject(params.subject.as_deref())?;
    let records = AttendanceStore::new(state.db())
        .find_for_student(student, subject)
        .await?;

    Ok(Json(records))
}
