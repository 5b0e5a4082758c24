mod config;
mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod postgres;

pub use config::*;
pub use error::*;
#[cfg(any(test, feature = "testing"))]
pub use memory::*;
pub use postgres::*;

use async_trait::async_trait;
use plexdi_types::{Commission, CommissionId, CommissionStatus, NewCommission};

/// Commission persistence contract
///
/// Individual operations are atomic; no cross-record consistency is promised.
#[async_trait]
pub trait CommissionStore: Send + Sync {
    /// Insert a new commission with status `queued` and store-assigned id and timestamp
    async fn create(&self, fields: NewCommission) -> StoreResult<Commission>;

    /// All commissions, ascending by id
    async fn list(&self) -> StoreResult<Vec<Commission>>;

    /// Fetch a single commission
    async fn fetch(&self, id: CommissionId) -> StoreResult<Commission>;

    /// Overwrite the status and return the refreshed record
    async fn update_status(
        &self,
        id: CommissionId,
        status: &CommissionStatus,
    ) -> StoreResult<Commission>;

    /// Permanently remove a commission
    async fn delete(&self, id: CommissionId) -> StoreResult<()>;
}
