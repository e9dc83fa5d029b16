use thiserror::Error;

pub mod audit;
pub mod database;
pub mod notifier;

pub use audit::AuditError;
pub use database::DatabaseError;
pub use notifier::NotifierError;

/// Internal error type for store and pipeline operations
///
/// Infrastructure errors (database, notifier) are shared; domain errors
/// carry enough context to be mapped to an actionable API response.
/// Not exposed via API - endpoints convert to an ApiResponse error.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Notifier(#[from] NotifierError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Number {0} is already on the stoplist")]
    DuplicateNumber(i64),

    #[error("Login {0} is already taken")]
    DuplicateLogin(String),

    #[error("Stoplist entry {0} not found")]
    StoplistNotFound(i32),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Role {0} not found")]
    RoleNotFound(String),

    #[error("Updates to stoplist entries are disabled")]
    UpdatesDisabled,

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn crypto(operation: &str, message: impl Into<String>) -> InternalError {
        InternalError::Crypto {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}
