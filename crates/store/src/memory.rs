use crate::{CommissionStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use plexdi_types::{Commission, CommissionId, CommissionStatus, NewCommission};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Debug)]
struct MemoryState {
    rows: BTreeMap<CommissionId, Commission>,
    next_id: CommissionId,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory commission store used as a test double
///
/// Ids are monotonic and never reused, even after deletion.
#[derive(Debug, Default)]
pub struct InMemoryCommissionStore {
    state: RwLock<MemoryState>,
    unavailable: AtomicBool,
}

impl InMemoryCommissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing the database connection
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Persistence("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CommissionStore for InMemoryCommissionStore {
    async fn create(&self, fields: NewCommission) -> StoreResult<Commission> {
        self.ensure_available()?;

        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let commission = Commission {
            id,
            name: fields.name,
            email: fields.email,
            discord: fields.discord,
            details: fields.details,
            kind: fields.kind,
            status: CommissionStatus::Queued,
            created_at: Utc::now(),
            designers: fields.designers,
        };
        state.rows.insert(id, commission.clone());
        Ok(commission)
    }

    async fn list(&self) -> StoreResult<Vec<Commission>> {
        self.ensure_available()?;
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn fetch(&self, id: CommissionId) -> StoreResult<Commission> {
        self.ensure_available()?;
        self.state
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: CommissionId,
        status: &CommissionStatus,
    ) -> StoreResult<Commission> {
        self.ensure_available()?;
        let mut state = self.state.write().await;
        let commission = state.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        commission.status = status.clone();
        Ok(commission.clone())
    }

    async fn delete(&self, id: CommissionId) -> StoreResult<()> {
        self.ensure_available()?;
        self.state
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> NewCommission {
        NewCommission::new(name, format!("{}@example.com", name.to_lowercase()), "logo")
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = InMemoryCommissionStore::new();

        let first = store.create(request("Ana")).await.unwrap();
        let second = store.create(request("Ben")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, CommissionStatus::Queued);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryCommissionStore::new();

        let first = store.create(request("Ana")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(request("Ben")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_status_returns_refreshed_record() {
        let store = InMemoryCommissionStore::new();
        let created = store.create(request("Ana")).await.unwrap();

        let updated = store
            .update_status(created.id, &CommissionStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(updated.status, CommissionStatus::InProgress);
        assert_eq!(updated.created_at, created.created_at);

        let fetched = store.fetch(created.id).await.unwrap();
        assert_eq!(fetched.status, CommissionStatus::InProgress);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let store = InMemoryCommissionStore::new();

        assert_eq!(store.fetch(42).await, Err(StoreError::NotFound(42)));
        assert_eq!(
            store.update_status(42, &CommissionStatus::Completed).await,
            Err(StoreError::NotFound(42))
        );
        assert_eq!(store.delete(42).await, Err(StoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = InMemoryCommissionStore::new();
        for name in ["Ana", "Ben", "Cy"] {
            store.create(request(name)).await.unwrap();
        }

        let ids: Vec<_> = store.list().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_with_persistence_error() {
        let store = InMemoryCommissionStore::new();
        store.set_unavailable(true);

        let err = store.create(request("Ana")).await.unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));
        assert!(!err.is_not_found());

        store.set_unavailable(false);
        assert!(store.list().await.unwrap().is_empty());
    }
}
