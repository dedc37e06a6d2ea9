//! Header extraction helpers shared by the API handlers.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

/// Name of the header whose value is echoed into every response envelope.
pub const MESSAGE_ID_HEADER: &str = "Message-Id";

/// Pull the bearer token out of the `Authorization` header, if any.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Copy the `Message-Id` header verbatim; absence is not an error.
#[must_use]
pub fn message_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(MESSAGE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
