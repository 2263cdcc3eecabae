use crate::{error::Result, extractors::Path, store::UserStore, StateTrait};
use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

pub async fn delete_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    UserStore::new(state.db()).delete(id).await?;

    Ok(StatusCode::OK)
}
