//! Caller identity extractor.
//!
//! Identity is a plain `X-User` header; there is no session or token layer.
//! A missing, empty, or non-UTF-8 header falls back to the anonymous
//! placeholder, so extraction never rejects a request.

use axum::{extract::FromRequestParts, http::request::Parts};

/// Placeholder identity for requests without an `X-User` header.
pub const ANONYMOUS: &str = "anon";

/// Header carrying the caller's username.
pub const USER_HEADER: &str = "x-user";

/// Extractor for the caller's claimed username.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CallerIdentity(author): CallerIdentity) -> String {
///     format!("posted by {author}")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub String);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(ANONYMOUS);

        Ok(Self(identity.to_owned()))
    }
}
