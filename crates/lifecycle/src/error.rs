use plexdi_store::StoreError;
use plexdi_types::{CommissionId, ValidationError};
use thiserror::Error;

/// Lifecycle errors surfaced to the caller
///
/// Notification failures never appear here; they end in the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Commission {0} not found")]
    NotFound(CommissionId),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<StoreError> for LifecycleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => LifecycleError::NotFound(id),
            StoreError::Persistence(msg) => LifecycleError::Persistence(msg),
        }
    }
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            LifecycleError::from(StoreError::NotFound(3)),
            LifecycleError::NotFound(3)
        );
        assert_eq!(
            LifecycleError::from(StoreError::Persistence("down".to_string())),
            LifecycleError::Persistence("down".to_string())
        );
    }
}
