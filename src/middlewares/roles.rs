use crate::{error, jwt::Claims};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use entity::users::Role;
use futures::future::{BoxFuture, Future};
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Lets a request through only when its claims carry `role`.
#[derive(Debug, Clone, Copy)]
pub struct RoleLayer {
    role: Role,
}

impl RoleLayer {
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    pub const fn teacher() -> Self {
        Self::new(Role::Teacher)
    }
}

impl<S> Layer<S> for RoleLayer {
    type Service = RequireRole<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireRole {
            inner,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequireRole<S> {
    inner: S,
    role: Role,
}

impl<S, B> Service<Request<B>> for RequireRole<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Future + Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(claims) = req.extensions().get::<Claims>() else {
            return Box::pin(async { Ok(error::COULD_NOT_GET_CLAIMS.into_response()) });
        };

        if claims.role != self.role {
            debug!(
                "user {} with role {:?} needs role {:?}",
                claims.sub, claims.role, self.role
            );
            return Box::pin(async { Ok(error::NOT_ENOUGH_PERMISSIONS.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
