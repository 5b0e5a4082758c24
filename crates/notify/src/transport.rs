use crate::{NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Fully addressed email handed to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email delivery capability
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> NotifyResult<()>;
}

/// Resend HTTP API transport
pub struct ResendTransport {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ResendTransport {
    /// Create a transport for the given API key and endpoint
    ///
    /// `request_timeout` bounds the HTTP exchange itself; the dispatcher
    /// applies its own ceiling on top.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        request_timeout: Duration,
    ) -> NotifyResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Transport for ResendTransport {
    async fn send(&self, email: &OutboundEmail) -> NotifyResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Transport used when no provider credentials are configured
///
/// Every send fails with [`NotifyError::Disabled`]; the caller logs the skip.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledTransport;

#[async_trait]
impl Transport for DisabledTransport {
    async fn send(&self, _email: &OutboundEmail) -> NotifyResult<()> {
        Err(NotifyError::Disabled)
    }
}
