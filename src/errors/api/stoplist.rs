use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::api::auth::ErrorBody;
use crate::errors::InternalError;

/// Error responses for the stoplist endpoints
#[derive(ApiResponse, Debug)]
pub enum StoplistApiError {
    /// Missing or invalid bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Operator lacks the required role, or updates are disabled by policy
    #[oai(status = 403)]
    Forbidden(Json<ErrorBody>),

    /// Entry validation failed
    #[oai(status = 400)]
    Validation(Json<ErrorBody>),

    /// The number is already on the stoplist
    #[oai(status = 409)]
    DuplicateNumber(Json<ErrorBody>),

    /// No entry with the given id
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl StoplistApiError {
    pub fn unauthorized() -> Self {
        StoplistApiError::Unauthorized(Json(ErrorBody {
            error: "unauthorized".to_string(),
            message: "A valid bearer token is required".to_string(),
        }))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        StoplistApiError::Forbidden(Json(ErrorBody {
            error: "forbidden".to_string(),
            message: message.into(),
        }))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoplistApiError::Validation(Json(ErrorBody {
            error: "validation_failed".to_string(),
            message: message.into(),
        }))
    }

    pub fn duplicate_number(number: i64) -> Self {
        StoplistApiError::DuplicateNumber(Json(ErrorBody {
            error: "duplicate_number".to_string(),
            message: format!("Number {} is already on the stoplist", number),
        }))
    }

    pub fn not_found(id: i32) -> Self {
        StoplistApiError::NotFound(Json(ErrorBody {
            error: "not_found".to_string(),
            message: format!("Stoplist entry {} not found", id),
        }))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        StoplistApiError::InternalError(Json(ErrorBody {
            error: "internal_error".to_string(),
            message: message.into(),
        }))
    }
}

impl From<InternalError> for StoplistApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Validation(msg) => StoplistApiError::validation(msg),
            InternalError::DuplicateNumber(number) => StoplistApiError::duplicate_number(number),
            InternalError::StoplistNotFound(id) => StoplistApiError::not_found(id),
            InternalError::UpdatesDisabled => {
                StoplistApiError::forbidden("Updates to stoplist entries are disabled")
            }
            other => {
                tracing::error!("Stoplist operation failed: {}", other);
                StoplistApiError::internal_error("Internal server error")
            }
        }
    }
}
