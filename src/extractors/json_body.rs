//! JSON body extractor that rejects malformed input with 400 instead of guessing.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes the request body as a JSON object into `T`.
///
/// The body is parsed whatever the `Content-Type` header says. Syntax errors,
/// an empty body, non-object JSON and type mismatches become
/// [`AppError::BadRequest`]; a body over the configured limit becomes
/// [`AppError::PayloadTooLarge`].
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(rejection.body_text())
            } else {
                AppError::BadRequest(rejection.body_text())
            }
        })?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        let decoded = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
        Ok(JsonBody(decoded))
    }
}
