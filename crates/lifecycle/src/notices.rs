use plexdi_notify::{Dispatcher, NotificationKind, NotifyError, render};
use plexdi_types::{Commission, CommissionId};

/// Spawn the client confirmation and admin notice for a new commission
pub(crate) fn spawn_creation_notices(dispatcher: &Dispatcher, commission: Commission) {
    let dispatcher = dispatcher.clone();
    tokio::spawn(async move {
        let client = render(NotificationKind::CreatedClient, &commission);
        let admin = render(NotificationKind::CreatedAdmin, &commission);

        let outcome = dispatcher
            .dispatch_pair(&commission.email, &client, &admin)
            .await;

        log_delivery(
            commission.id,
            NotificationKind::CreatedClient,
            &commission.email,
            &outcome.client,
        );
        log_delivery(
            commission.id,
            NotificationKind::CreatedAdmin,
            &dispatcher.config().admin_address,
            &outcome.admin,
        );
    });
}

/// Spawn the status notice addressed to the requester
pub(crate) fn spawn_status_notice(
    dispatcher: &Dispatcher,
    kind: NotificationKind,
    commission: Commission,
) {
    let dispatcher = dispatcher.clone();
    tokio::spawn(async move {
        let message = render(kind, &commission);
        let result = dispatcher.send(&commission.email, &message).await;
        log_delivery(commission.id, kind, &commission.email, &result);
    });
}

fn log_delivery(
    id: CommissionId,
    kind: NotificationKind,
    to: &str,
    result: &Result<(), NotifyError>,
) {
    match result {
        Ok(()) => tracing::info!(id, kind = kind.as_str(), to, "✅ Notification sent"),
        Err(err) if err.is_disabled() => {
            tracing::warn!(id, kind = kind.as_str(), to, "⚠️ Notification skipped: {}", err)
        }
        Err(err) => tracing::error!(id, kind = kind.as_str(), to, "❌ Notification failed: {}", err),
    }
}
