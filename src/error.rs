use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::dto::ErrorMessage;
use crate::repository::StoreError;

/// Everything a todo handler can fail with.
///
/// Client input problems answer 400 with `{"error": ...}`. Store failures
/// answer 500 with the driver's message as plain text.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid ID")]
    InvalidId,

    #[error("Todo body cannot be empty.")]
    EmptyBody,

    #[error("{0}")]
    MalformedBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::EmptyBody | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                HttpResponse::InternalServerError().body(err.to_string())
            }
            _ => HttpResponse::build(self.status_code()).json(ErrorMessage {
                error: self.to_string(),
            }),
        }
    }
}
