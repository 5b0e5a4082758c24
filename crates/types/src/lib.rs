// Module exports
pub mod commission;
pub mod error;
pub mod status;

// Re-export commonly used types
pub use commission::*;
pub use error::*;
pub use status::*;

/// Store-assigned commission identifier
pub type CommissionId = i64;
