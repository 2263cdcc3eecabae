mod create;
mod delete;
mod eligibility;
mod get;
mod update;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};

/// Routes for exams and their eligibility records
///
/// # Any user
/// GET    /exams
/// GET    /exams/:id
///
/// # Teacher actions
/// POST   /exams
/// PUT    /exams/:id
/// DELETE /exams/:id
/// GET    /exams/:id/eligibility
/// POST   /exams/:id/calculate-eligibility
///
/// # Self or teacher
/// GET    /exams/eligibility/student/:id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(get::list_exams::<S>).post(create::create_exam::<S>.layer(RoleLayer::teacher())),
        )
        .route(
            "/:id",
            get(get::get_exam::<S>)
                .put(update::update_exam::<S>.layer(RoleLayer::teacher()))
                .delete(delete::delete_exam::<S>.layer(RoleLayer::teacher())),
        )
        .route(
            "/:id/eligibility",
            get(eligibility::get_exam_eligibility::<S>.layer(RoleLayer::teacher())),
        )
        .route(
            "/:id/calculate-eligibility",
            post(eligibility::calculate_eligibility::<S>.layer(RoleLayer::teacher())),
        )
        .route(
            "/eligibility/student/:id",
            get(eligibility::get_student_eligibility::<S>),
        )
}
