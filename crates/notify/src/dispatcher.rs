use crate::{NotifyConfig, NotifyError, NotifyResult, OutboundEmail, RenderedMessage, Transport};
use std::sync::Arc;

/// Outcome of a client/admin notification pair
///
/// The two sends are independent; each field is the outcome of its own send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub client: NotifyResult<()>,
    pub admin: NotifyResult<()>,
}

impl PairOutcome {
    pub fn client_delivered(&self) -> bool {
        self.client.is_ok()
    }

    pub fn admin_delivered(&self) -> bool {
        self.admin.is_ok()
    }

    pub fn all_delivered(&self) -> bool {
        self.client_delivered() && self.admin_delivered()
    }
}

/// Sends rendered messages through a transport with a per-send timeout
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    config: NotifyConfig,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, config: NotifyConfig) -> Result<Self, NotifyError> {
        config
            .validate()
            .map_err(|e| NotifyError::InvalidConfig(e.to_string()))?;
        Ok(Self { transport, config })
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Send one message to `to`, bounded by the configured timeout
    pub async fn send(&self, to: &str, message: &RenderedMessage) -> NotifyResult<()> {
        let email = OutboundEmail {
            from: self.config.from_address.clone(),
            to: to.to_string(),
            subject: message.subject.clone(),
            html: message.html.clone(),
        };

        tokio::time::timeout(self.config.send_timeout, self.transport.send(&email))
            .await
            .map_err(|_| NotifyError::Timeout(self.config.send_timeout))?
    }

    /// Send the client message to `client_to` and the admin message to the
    /// configured admin address, concurrently
    pub async fn dispatch_pair(
        &self,
        client_to: &str,
        client: &RenderedMessage,
        admin: &RenderedMessage,
    ) -> PairOutcome {
        let (client, admin) = tokio::join!(
            self.send(client_to, client),
            self.send(&self.config.admin_address, admin)
        );
        PairOutcome { client, admin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingTransport;
    use std::time::Duration;

    const ADMIN: &str = "studio@plexdistudio.com";

    fn message(subject: &str) -> RenderedMessage {
        RenderedMessage {
            subject: subject.to_string(),
            html: format!("<p>{subject}</p>"),
        }
    }

    fn dispatcher(transport: Arc<RecordingTransport>) -> Dispatcher {
        Dispatcher::new(transport, NotifyConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_send_uses_configured_sender() {
        let transport = Arc::new(RecordingTransport::new());
        let dispatcher = dispatcher(transport.clone());

        dispatcher
            .send("ana@example.com", &message("Hi"))
            .await
            .unwrap();

        let sent = transport.delivered();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "noreply@plexdistudio.com");
        assert_eq!(sent[0].to, "ana@example.com");
        assert_eq!(sent[0].subject, "Hi");
    }

    #[tokio::test]
    async fn test_pair_addresses_admin_from_config() {
        let transport = Arc::new(RecordingTransport::new());
        let dispatcher = dispatcher(transport.clone());

        let outcome = dispatcher
            .dispatch_pair("ana@example.com", &message("client"), &message("admin"))
            .await;

        assert!(outcome.all_delivered());
        assert_eq!(transport.delivered_to(ADMIN)[0].subject, "admin");
        assert_eq!(transport.delivered_to("ana@example.com")[0].subject, "client");
    }

    #[tokio::test]
    async fn test_admin_failure_does_not_affect_client() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail_for(ADMIN);
        let dispatcher = dispatcher(transport.clone());

        let outcome = dispatcher
            .dispatch_pair("ana@example.com", &message("client"), &message("admin"))
            .await;

        assert!(outcome.client_delivered());
        assert!(!outcome.admin_delivered());
        assert!(!outcome.all_delivered());
        assert_eq!(transport.delivered_to("ana@example.com").len(), 1);
    }

    #[tokio::test]
    async fn test_client_failure_does_not_affect_admin() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail_for("ana@example.com");
        let dispatcher = dispatcher(transport.clone());

        let outcome = dispatcher
            .dispatch_pair("ana@example.com", &message("client"), &message("admin"))
            .await;

        assert!(!outcome.client_delivered());
        assert!(outcome.admin_delivered());
    }

    #[tokio::test]
    async fn test_send_times_out() {
        let transport = Arc::new(RecordingTransport::new().with_delay(Duration::from_secs(5)));
        let config = NotifyConfig::default().with_send_timeout(Duration::from_millis(50));
        let dispatcher = Dispatcher::new(transport.clone(), config).unwrap();

        let err = dispatcher
            .send("ana@example.com", &message("Hi"))
            .await
            .unwrap_err();
        assert_eq!(err, NotifyError::Timeout(Duration::from_millis(50)));
        assert!(transport.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_pair_sends_run_concurrently() {
        let transport = Arc::new(RecordingTransport::new().with_delay(Duration::from_millis(200)));
        let config = NotifyConfig::default().with_send_timeout(Duration::from_millis(300));
        let dispatcher = Dispatcher::new(transport, config).unwrap();

        // Sequential sends would exceed the shared budget of one timeout.
        let started = std::time::Instant::now();
        let outcome = dispatcher
            .dispatch_pair("ana@example.com", &message("client"), &message("admin"))
            .await;

        assert!(outcome.all_delivered());
        assert!(started.elapsed() < Duration::from_millis(390));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let transport = Arc::new(RecordingTransport::new());
        let config = NotifyConfig::new("noreply", ADMIN);
        assert!(matches!(
            Dispatcher::new(transport, config),
            Err(NotifyError::InvalidConfig(_))
        ));
    }
}
