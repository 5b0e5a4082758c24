use crate::{NotifyError, NotifyResult, OutboundEmail, Transport};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;

/// Transport test double that records deliveries and injects failures
pub struct RecordingTransport {
    delivered: Mutex<Vec<OutboundEmail>>,
    failing: Mutex<HashSet<String>>,
    fail_all: AtomicBool,
    delay: Option<Duration>,
    attempts: watch::Sender<usize>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTransport {
    pub fn new() -> Self {
        let (attempts, _) = watch::channel(0);
        Self {
            delivered: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            fail_all: AtomicBool::new(false),
            delay: None,
            attempts,
        }
    }

    /// Sleep before every send
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Reject every send addressed to `recipient`
    pub fn fail_for(&self, recipient: impl Into<String>) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(recipient.into());
        }
    }

    /// Reject every send
    pub fn fail_all(&self) {
        self.fail_all.store(true, Ordering::SeqCst);
    }

    /// Successfully delivered emails, in completion order
    pub fn delivered(&self) -> Vec<OutboundEmail> {
        self.delivered
            .lock()
            .map(|delivered| delivered.clone())
            .unwrap_or_default()
    }

    /// Delivered emails addressed to `recipient`
    pub fn delivered_to(&self, recipient: &str) -> Vec<OutboundEmail> {
        self.delivered()
            .into_iter()
            .filter(|email| email.to == recipient)
            .collect()
    }

    /// Number of send attempts, successful or not
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }

    /// Wait until at least `count` sends were attempted
    pub async fn wait_for_attempts(&self, count: usize, timeout: Duration) -> bool {
        let mut rx = self.attempts.subscribe();
        matches!(
            tokio::time::timeout(timeout, rx.wait_for(|attempts| *attempts >= count)).await,
            Ok(Ok(_))
        )
    }

    fn should_fail(&self, recipient: &str) -> bool {
        self.fail_all.load(Ordering::SeqCst)
            || self
                .failing
                .lock()
                .map(|failing| failing.contains(recipient))
                .unwrap_or(false)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, email: &OutboundEmail) -> NotifyResult<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let result = if self.should_fail(&email.to) {
            Err(NotifyError::Transport(format!(
                "simulated failure for {}",
                email.to
            )))
        } else {
            if let Ok(mut delivered) = self.delivered.lock() {
                delivered.push(email.clone());
            }
            Ok(())
        };

        self.attempts.send_modify(|attempts| *attempts += 1);
        result
    }
}
