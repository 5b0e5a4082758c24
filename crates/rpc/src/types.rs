use plexdi_types::{Commission, CommissionId};
use serde::{Deserialize, Serialize};

pub const CREATED_MESSAGE: &str = "Form submitted successfully. Please check your email.";
pub const UPDATED_MESSAGE: &str = "Commission updated successfully";
pub const DELETED_MESSAGE: &str = "Commission deleted successfully";

/// Create commission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommissionResponse {
    pub message: String,
    pub commission: Commission,
}

/// Status transition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status label; blank is rejected
    #[serde(default)]
    pub status: String,
}

/// Status transition response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub commission: Commission,
}

/// Delete commission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommissionResponse {
    pub message: String,
    pub id: CommissionId,
}

impl From<Commission> for CreateCommissionResponse {
    fn from(commission: Commission) -> Self {
        Self {
            message: CREATED_MESSAGE.to_string(),
            commission,
        }
    }
}

impl From<Commission> for UpdateStatusResponse {
    fn from(commission: Commission) -> Self {
        Self {
            message: UPDATED_MESSAGE.to_string(),
            commission,
        }
    }
}

impl From<CommissionId> for DeleteCommissionResponse {
    fn from(id: CommissionId) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            id,
        }
    }
}
