use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum StudentError {
    #[error("student {0} not found")]
    NotFound(i64),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for StudentError {
    fn from(e: figment::Error) -> Self {
        StudentError::Config(Box::new(e))
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            StudentError::NotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            StudentError::BadRequest(message) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message,
                };
                (status, body)
            }
            err @ (StudentError::Database(_)
            | StudentError::Migration(_)
            | StudentError::Config(_)
            | StudentError::Io(_)) => {
                error!(error = %err, "request failed with internal error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let resp = StudentError::NotFound(7).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let resp = StudentError::Database(SqlxError::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains(r#""code":"INTERNAL_ERROR""#));
        assert!(!body_str.contains("closed"));
    }
}
