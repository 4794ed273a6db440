//! Request body extraction for form submissions.
//!
//! The submit endpoint accepts either a classic form post
//! (`application/x-www-form-urlencoded`) or a JSON body. Browsers send the
//! form encoding; scripted clients tend to send JSON.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Extractor that accepts `T` as either a form-encoded or JSON request body.
///
/// Any body that fails to deserialize is reported as a validation error, so
/// clients get the same 400 response for a missing field and a malformed one.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::Validation)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| AppError::Validation)?;
            Ok(Self(value))
        }
    }
}
