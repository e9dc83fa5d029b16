use poem_openapi::{payload::Json, ApiResponse, Object};

/// Standardized error response body
#[derive(Object, Debug)]
pub struct ErrorBody {
    /// Error code identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid login or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorBody>),

    /// Account exists but is deactivated
    #[oai(status = 403)]
    InactiveAccount(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl AuthError {
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorBody {
            error: "invalid_credentials".to_string(),
            message: "Invalid login or password".to_string(),
        }))
    }

    pub fn inactive_account() -> Self {
        AuthError::InactiveAccount(Json(ErrorBody {
            error: "inactive_account".to_string(),
            message: "Account is deactivated".to_string(),
        }))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        AuthError::InternalError(Json(ErrorBody {
            error: "internal_error".to_string(),
            message: message.into(),
        }))
    }
}
