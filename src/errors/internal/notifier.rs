use thiserror::Error;

/// Failures while mirroring stoplist state to the telephony manager
///
/// These occur after the database commit; callers report them without
/// rolling back the persisted mutation.
#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Telephony manager login failed: {0}")]
    Auth(String),

    #[error("Telephony manager command {action} failed: {message}")]
    Command { action: String, message: String },
}

impl NotifierError {
    pub fn auth(message: impl Into<String>) -> Self {
        NotifierError::Auth(message.into())
    }

    pub fn command(action: &str, message: impl Into<String>) -> Self {
        NotifierError::Command {
            action: action.to_string(),
            message: message.into(),
        }
    }
}
