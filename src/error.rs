use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::StorageError;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found with id: {0}")]
    NotFound(i64),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

// Body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    fn with_message(error: &'static str, message: String) -> Self {
        ErrorResponse {
            error,
            message: Some(message),
            messages: None,
        }
    }
}

/// One message per failing field; the first violation wins when a field has several.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            violations.first().map(|violation| {
                let message = violation
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

impl ResponseError for TaskError {
    fn status_code(&self) -> StatusCode {
        match self {
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskError::Validation(_) | TaskError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TaskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            TaskError::NotFound(_) => ErrorResponse::with_message("not_found", self.to_string()),
            TaskError::Validation(errors) => ErrorResponse {
                error: "validation_failed",
                message: None,
                messages: Some(field_messages(errors)),
            },
            TaskError::BadRequest(message) => {
                ErrorResponse::with_message("bad_request", message.clone())
            }
            TaskError::Storage(e) => {
                error!("Storage failure: {}", e);
                ErrorResponse::with_message("internal", "Internal server error".into())
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
