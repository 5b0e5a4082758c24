use crate::{
    LifecycleResult,
    notices::{spawn_creation_notices, spawn_status_notice},
};
use plexdi_notify::{Dispatcher, NotificationKind};
use plexdi_store::CommissionStore;
use plexdi_types::{Commission, CommissionId, CommissionStatus, NewCommission, ValidationError};
use std::sync::Arc;

/// Commission lifecycle entry points
///
/// Each operation resolves as soon as the store has answered. Emails are
/// handed to background tasks and their outcome is only logged.
#[derive(Clone)]
pub struct LifecycleController {
    store: Arc<dyn CommissionStore>,
    dispatcher: Dispatcher,
}

impl LifecycleController {
    pub fn new(store: Arc<dyn CommissionStore>, dispatcher: Dispatcher) -> Self {
        Self { store, dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Validate and persist a new request, then notify requester and studio
    pub async fn request_commission(&self, fields: NewCommission) -> LifecycleResult<Commission> {
        fields.validate()?;

        let commission = self.store.create(fields.normalized()).await?;
        tracing::debug!(
            id = commission.id,
            kind = %commission.kind,
            "📝 Commission requested"
        );

        spawn_creation_notices(&self.dispatcher, commission.clone());
        Ok(commission)
    }

    pub async fn list_commissions(&self) -> LifecycleResult<Vec<Commission>> {
        Ok(self.store.list().await?)
    }

    pub async fn get_commission(&self, id: CommissionId) -> LifecycleResult<Commission> {
        Ok(self.store.fetch(id).await?)
    }

    /// Move a commission to `status`
    ///
    /// Any non-blank status is accepted. Entering `in_progress` or
    /// `completed` emails the requester, rendered from the updated record.
    pub async fn transition_status(
        &self,
        id: CommissionId,
        status: CommissionStatus,
    ) -> LifecycleResult<Commission> {
        if status.is_blank() {
            return Err(ValidationError::MissingStatus.into());
        }
        let status = CommissionStatus::parse(status.as_str());

        let current = self.store.fetch(id).await?;
        let updated = self.store.update_status(id, &status).await?;
        tracing::debug!(
            id,
            from = %current.status,
            to = %updated.status,
            "🔄 Commission status changed"
        );

        if let Some(kind) = NotificationKind::for_status(&updated.status) {
            spawn_status_notice(&self.dispatcher, kind, updated.clone());
        }
        Ok(updated)
    }

    pub async fn remove_commission(&self, id: CommissionId) -> LifecycleResult<()> {
        self.store.delete(id).await?;
        tracing::debug!(id, "🗑️ Commission deleted");
        Ok(())
    }
}
