mod assessment;
mod bulk;
mod list;
mod mark;
mod stats;
mod student;

use crate::{middlewares::RoleLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::{get, post},
    Router,
};

/// Routes for attendance and assessments
///
/// # Teacher actions
/// GET  /attendance
/// POST /attendance
/// POST /attendance/bulk
/// POST /attendance/assessment
///
/// # Self or teacher
/// GET  /attendance/student/:id
/// GET  /attendance/stats/:id
///
/// # Any user
/// GET  /attendance/assessment
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_attendance::<S>.layer(RoleLayer::teacher()))
                .post(mark::mark_attendance::<S>.layer(RoleLayer::teacher())),
        )
        .route("/bulk", post(bulk::mark_bulk::<S>.layer(RoleLayer::teacher())))
        .route("/student/:id", get(student::get_student_attendance::<S>))
        .route("/stats/:id", get(stats::get_stats::<S>))
        .route(
            "/assessment",
            get(assessment::list_assessments::<S>)
                .post(assessment::create_assessment::<S>.layer(RoleLayer::teacher())),
        )
}
