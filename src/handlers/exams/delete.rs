use crate::{error::Result, extractors::Path, store::ExamStore, StateTrait};
use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

pub async fn delete_exam<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    ExamStore::new(state.db()).delete(id).await?;

    Ok(StatusCode::OK)
}
