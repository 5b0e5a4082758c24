use crate::{Metrics, RpcError};
use axum::{
    extract::{ConnectInfo, Request},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// How often idle client buckets are dropped
pub const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Per client IP token bucket
pub type IpRateLimiter = DefaultKeyedRateLimiter<IpAddr>;

/// Rate limiter middleware
#[derive(Clone)]
pub struct RateLimitLayer {
    pub limiter: Arc<IpRateLimiter>,
}

impl RateLimitLayer {
    /// Allow `burst` requests per client, replenishing one every `period`
    pub fn new(burst: u32, period: Duration) -> Result<Self, RpcError> {
        let burst = NonZeroU32::new(burst)
            .ok_or_else(|| RpcError::ServerError("rate limit burst must be non-zero".to_string()))?;
        let quota = Quota::with_period(period)
            .ok_or_else(|| {
                RpcError::ServerError("rate limit period must be non-zero".to_string())
            })?
            .allow_burst(burst);

        Ok(Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
        })
    }

    /// Drop buckets of clients that are back to a full quota
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Run `retain_recent` every `every` until the handle is aborted
    pub fn spawn_cleanup(&self, every: Duration) -> JoinHandle<()> {
        let layer = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                layer.retain_recent();
                tracing::debug!(clients = layer.limiter.len(), "Rate limiter buckets pruned");
            }
        })
    }
}

/// Client IP from the connection info, or the unspecified address
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Rate limiting middleware handler
///
/// CORS preflight requests pass through unmetered.
pub async fn rate_limit_middleware(
    limiter: Arc<IpRateLimiter>,
    metrics: Option<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let ip = client_ip(&request);
    match limiter.check_key(&ip) {
        Ok(_) => next.run(request).await,
        Err(_) => {
            tracing::warn!(%ip, "Rate limit exceeded");
            let err = RpcError::RateLimited;
            if let Some(metrics) = &metrics {
                metrics.record_error(err.kind());
            }
            err.into_response()
        }
    }
}
