//! Request body extractor accepting JSON or urlencoded forms.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;

/// Message for bodies that cannot be decoded.
pub const INVALID_BODY: &str = "Invalid request body";

/// A request body decoded from JSON, or from
/// `application/x-www-form-urlencoded` when the content type says so.
///
/// Decoding failures become a 400 envelope instead of axum's plain-text
/// rejection.
///
/// # Example
///
/// ```ignore
/// async fn user_signup(
///     Payload(req): Payload<UserSignupRequest>,
/// ) -> Result<Json<UserSignupResponse>, ApiError> {
///     // ...
/// }
/// ```
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                tracing::debug!("Rejected form body: {}", e);
                ApiError::bad_request(INVALID_BODY)
            })?;
            return Ok(Payload(value));
        }

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected JSON body: {}", e);
            ApiError::bad_request(INVALID_BODY)
        })?;
        Ok(Payload(value))
    }
}
