use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::db::NewStudent;
use crate::error::StudentError;

/// JSON body for POST/PUT. Parsed regardless of `Content-Type`; any failure becomes a 400.
#[derive(Debug, Clone)]
pub struct StudentPayload(pub NewStudent);

impl<S> FromRequest<S> for StudentPayload
where
    S: Send + Sync,
{
    type Rejection = StudentError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| StudentError::BadRequest(rejection.body_text()))?;

        if body.is_empty() {
            return Err(StudentError::BadRequest("request body is empty".to_string()));
        }

        let value = serde_json::from_slice::<Value>(&body)
            .map_err(|e| StudentError::BadRequest(format!("invalid JSON body: {e}")))?;
        // derived struct visitors also accept sequences
        if !value.is_object() {
            return Err(StudentError::BadRequest(
                "student body must be a JSON object".to_string(),
            ));
        }

        let student = serde_json::from_value::<NewStudent>(value)
            .map_err(|e| StudentError::BadRequest(format!("invalid student body: {e}")))?;
        Ok(StudentPayload(student))
    }
}
