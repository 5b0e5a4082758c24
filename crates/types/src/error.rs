use thiserror::Error;

/// Input validation errors, raised before any persistence is attempted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email is not a syntactically addressable string
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Status label is blank
    #[error("Missing status")]
    MissingStatus,
}
