use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::api::auth::ErrorBody;
use crate::errors::InternalError;

/// Error responses for the user/role/log admin endpoints
#[derive(ApiResponse, Debug)]
pub enum AdminApiError {
    /// Missing or invalid bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Operator lacks the required role
    #[oai(status = 403)]
    Forbidden(Json<ErrorBody>),

    /// Request validation failed
    #[oai(status = 400)]
    Validation(Json<ErrorBody>),

    /// Login already taken
    #[oai(status = 409)]
    DuplicateLogin(Json<ErrorBody>),

    /// Target user or role does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl AdminApiError {
    pub fn unauthorized() -> Self {
        AdminApiError::Unauthorized(Json(ErrorBody {
            error: "unauthorized".to_string(),
            message: "A valid bearer token is required".to_string(),
        }))
    }

    pub fn forbidden() -> Self {
        AdminApiError::Forbidden(Json(ErrorBody {
            error: "forbidden".to_string(),
            message: "The admin role is required".to_string(),
        }))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AdminApiError::Validation(Json(ErrorBody {
            error: "validation_failed".to_string(),
            message: message.into(),
        }))
    }

    pub fn duplicate_login(login: &str) -> Self {
        AdminApiError::DuplicateLogin(Json(ErrorBody {
            error: "duplicate_login".to_string(),
            message: format!("Login {} is already taken", login),
        }))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AdminApiError::NotFound(Json(ErrorBody {
            error: "not_found".to_string(),
            message: message.into(),
        }))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        AdminApiError::InternalError(Json(ErrorBody {
            error: "internal_error".to_string(),
            message: message.into(),
        }))
    }
}

impl From<InternalError> for AdminApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Validation(msg) => AdminApiError::validation(msg),
            InternalError::DuplicateLogin(login) => AdminApiError::duplicate_login(&login),
            InternalError::UserNotFound(login) => {
                AdminApiError::not_found(format!("User {} not found", login))
            }
            InternalError::RoleNotFound(name) => {
                AdminApiError::not_found(format!("Role {} not found", name))
            }
            other => {
                tracing::error!("Admin operation failed: {}", other);
                AdminApiError::internal_error("Internal server error")
            }
        }
    }
}
