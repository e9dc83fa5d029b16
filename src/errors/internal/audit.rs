use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit log write failed: {0}")]
    LogWriteFailed(String),
}
