use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::StudentError;

/// `{id}` path segment. Non-integer or out-of-range ids become a JSON 400.
#[derive(Debug, Clone, Copy)]
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = StudentError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| StudentError::BadRequest(rejection.body_text()))?;
        Ok(Self(id))
    }
}
