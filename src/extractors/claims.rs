use crate::{
    error::{self, Error},
    jwt::Claims,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}

impl Claims {
    /// Students may only look at their own records.
    pub fn ensure_self_or_teacher(&self, student: Uuid) -> error::Result {
        if self.is_teacher() || self.sub == student {
            Ok(())
        } else {
            Err(error::NOT_AUTHORIZED)
        }
    }
}
