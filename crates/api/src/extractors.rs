//! Request extractors.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::middleware::SessionHandle;
use crate::response::ApiError;

/// The datastore session attached by the session middleware.
pub struct DbSession(pub SessionHandle);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .map(DbSession)
            .ok_or_else(|| ApiError::internal("session middleware is not installed"))
    }
}
