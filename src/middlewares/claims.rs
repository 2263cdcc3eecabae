use crate::StateTrait;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::Instrument;

/// Verifies the bearer token, if any, and stores its claims in the request extensions.
/// Rejection is left to the extractors and role layers further down.
pub async fn get_claims<S: StateTrait>(
    State(state): State<S>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(header) = request.headers().typed_get::<Authorization<Bearer>>() else {
        return next.run(request).await;
    };

    let claims = match state.jwt().get_claims(header.token()) {
        Ok(claims) => claims,
        Err(error) => {
            debug!("rejected bearer token: {error}");
            return next.run(request).await;
        }
    };

    let span = info_span!(
        "claims",
        user_id = claims.sub.to_string(),
        role = ?claims.role
    );

    request.extensions_mut().insert(claims);

    next.run(request).instrument(span).await
}
