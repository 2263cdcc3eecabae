mod attendance;
mod exams;
mod users;

use crate::state::StateTrait;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .nest("/attendance", attendance::routes::<S>())
                .nest("/exams", exams::routes::<S>())
                .nest("/users", users::routes::<S>()),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(error) = state.db().execute_unprepared("select 1").await {
        warn!("liveness check failed: {error}");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
