use crate::{
    error::Result,
    extractors::{Json, Path, Query},
    jwt::Claims,
    store::UserStore,
    StateTrait,
};
use axum::extract::State;
use entity::users;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct Params {
    usn: Option<String>,
}

pub async fn list_students<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Vec<users::Model>>> {
    let students = UserStore::new(state.db())
        .list_students(params.usn.as_deref())
        .await?;

    Ok(Json(students))
}

pub async fn get_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<Json<users::Model>> {
    Ok(Json(UserStore::new(state.db()).find(id).await?))
}

pub async fn get_by_usn<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(usn): Path<String>,
) -> Result<Json<users::Model>> {
    let student = UserStore::new(state.db())
        .find_student_by_usn(&usn)
        .await?;

    claims.ensure_self_or_teacher(student.id)?;

    Ok(Json(student))
}

pub async fn get_me<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<users::Model>> {
    Ok(Json(UserStore::new(state.db()).find(claims.sub).await?))
}
