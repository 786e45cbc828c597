//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{kind} not found with id: {id}")]
    NotFound { kind: &'static str, id: i64 },
    /// One entry per offending field, keyed by the wire field name.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn student_not_found(id: i64) -> Self {
        AppError::NotFound { kind: "Student", id }
    }

    pub fn course_not_found(id: i64) -> Self {
        AppError::NotFound { kind: "Course", id }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    timestamp: String,
    message: String,
}

impl ErrorBody {
    fn new(message: String) -> Self {
        ErrorBody {
            timestamp: chrono::Utc::now().to_rfc3339(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { .. } => {
                let body = ErrorBody::new(self.to_string());
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            // Field -> message map, one key per violation.
            AppError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            // Detail stays in the log; the client gets a fixed message.
            AppError::Db(e) => {
                tracing::error!(error = %e, "request failed");
                let body = ErrorBody::new("An internal server error occurred.".into());
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_lookup_message() {
        let resp = AppError::student_not_found(99).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Student not found with id: 99");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn course_not_found_names_the_course() {
        let resp = AppError::course_not_found(200).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Course not found with id: 200");
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_field_map() {
        let mut fields = BTreeMap::new();
        fields.insert("firstName".to_string(), "First name cannot be empty".to_string());
        fields.insert("email".to_string(), "Email should be valid".to_string());
        let resp = AppError::Validation(fields).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["firstName"], "First name cannot be empty");
        assert_eq!(body["email"], "Email should be valid");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn database_errors_map_to_500_without_detail() {
        let resp = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "An internal server error occurred.");
        assert!(body["timestamp"].is_string());
    }
}
