use std::time::Duration;
use thiserror::Error;

/// Notification delivery errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Email transport disabled: no API key configured")]
    Disabled,

    #[error("Send timed out after {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider rejected email ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NotifyError {
    /// Whether the failure comes from configuration rather than delivery
    pub fn is_disabled(&self) -> bool {
        matches!(self, NotifyError::Disabled)
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Transport(err.to_string())
    }
}

pub type NotifyResult<T> = Result<T, NotifyError>;
