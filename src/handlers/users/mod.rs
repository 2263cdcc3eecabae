mod create;
mod delete;
mod get;
mod update;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{handler::Handler, routing::get, Router};

/// Routes for user management
///
/// # Teacher actions
/// GET    /users
/// POST   /users
/// GET    /users/:id
/// PUT    /users/:id
/// DELETE /users/:id
///
/// # Self or teacher
/// GET    /users/usn/:usn
///
/// # Any user
/// GET    /users/me
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(get::list_students::<S>.layer(RoleLayer::teacher()))
                .post(create::create_user::<S>.layer(RoleLayer::teacher())),
        )
        .route("/me", get(get::get_me::<S>))
        .route("/usn/:usn", get(get::get_by_usn::<S>))
        .route(
            "/:id",
            get(get::get_user::<S>.layer(RoleLayer::teacher()))
                .put(update::update_user::<S>.layer(RoleLayer::teacher()))
                .delete(delete::delete_user::<S>.layer(RoleLayer::teacher())),
        )
}
