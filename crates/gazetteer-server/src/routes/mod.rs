use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use gazetteer_core::GazetteerError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cities;
pub mod health_check;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// A request parameter is outside its documented range.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Gazetteer(#[from] GazetteerError),
}

impl ApiError {
    pub fn to_message(&self) -> String {
        match self {
            ApiError::Gazetteer(GazetteerError::NotFound(_)) => "City not found".to_string(),
            ApiError::Gazetteer(GazetteerError::Validation(msg)) | ApiError::Validation(msg) => {
                msg.clone()
            }
            // Load errors never reach a request; anything else stays internal
            ApiError::Gazetteer(_) => "internal server error".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Gazetteer(GazetteerError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Gazetteer(GazetteerError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Gazetteer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage {
            error: self.to_message(),
        })
    }
}

/// Checks that `value` has between `min` and `max` characters (inclusive).
pub fn validate_length(param: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::Validation(format!(
            "{param} must be {min} to {max} characters long, got {len}"
        )));
    }
    Ok(())
}
