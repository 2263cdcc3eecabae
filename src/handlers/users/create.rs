use crate::{
    error::Result,
    extractors::{Json, ValidatedJson},
    store::{NewUser, UserStore},
    utils::parse_subject,
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::users::{self, Role};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    name: String,
    #[validate(email)]
    email: String,
    role: Role,
    #[validate(length(min = 1, max = 32))]
    usn: Option<String>,
    #[validate(length(min = 1, max = 16))]
    section: Option<String>,
    #[validate(range(min = 1, max = 8))]
    semester: Option<i16>,
    subject: Option<String>,
}

pub async fn create_user<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<users::Model>)> {
    let subject = parse_subject(request.subject.as_deref())?;

    // student and teacher fields don't mix
    let user = match request.role {
        Role::Student => NewUser {
            name: request.name,
            email: request.email.to_lowercase(),
            role: Role::Student,
            usn: request.usn,
            section: request.section,
            semester: request.semester,
            subject: None,
        },
        Role::Teacher => NewUser {
            name: request.name,
            email: request.email.to_lowercase(),
            role: Role::Teacher,
            usn: None,
            section: None,
            semester: None,
            subject,
        },
    };

    let user = UserStore::new(state.db()).create(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
