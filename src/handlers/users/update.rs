use crate::{
    error::{self, Result},
    extractors::{Json, Path, ValidatedJson},
    store::{UserChanges, UserStore},
    StateTrait,
};
use axum::extract::State;
use entity::{
    users::{self, Role},
    Subject,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    name: Option<String>,
    #[validate(email)]
    email: Option<String>,
    role: Option<Role>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    usn: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    section: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    semester: Option<Option<i16>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    subject: Option<Option<String>>,
}

pub async fn update_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<users::Model>> {
    if let Some(Some(semester)) = request.semester {
        if !(1..=8).contains(&semester) {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    let subject = match request.subject {
        Some(Some(subject)) => Some(Some(subject.parse::<Subject>()?)),
        Some(None) => Some(None),
        None => None,
    };

    let changes = UserChanges {
        name: request.name,
        email: request.email.map(|email| email.to_lowercase()),
        role: request.role,
        usn: request.usn,
        section: request.section,
        semester: request.semester,
        subject,
    };

    let user = UserStore::new(state.db()).update(id, changes).await?;

    Ok(Json(user))
}
