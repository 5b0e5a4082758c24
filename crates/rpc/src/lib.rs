mod error;
mod handlers;
mod metrics;
mod middleware;
mod types;

pub use error::*;
pub use metrics::*;
pub use middleware::*;
pub use types::*;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, Method, header},
    middleware::Next,
    routing::get,
};
use plexdi_lifecycle::LifecycleController;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// RPC server state
#[derive(Clone)]
pub struct RpcState {
    /// Lifecycle controller
    pub controller: LifecycleController,
    /// Metrics collector (optional)
    pub metrics: Option<Arc<Metrics>>,
}

impl RpcState {
    /// Create a new RPC state
    pub fn new(controller: LifecycleController) -> Self {
        Self {
            controller,
            metrics: None,
        }
    }

    /// Create a new RPC state with metrics
    pub fn new_with_metrics(controller: LifecycleController, metrics: Metrics) -> Self {
        Self {
            controller,
            metrics: Some(Arc::new(metrics)),
        }
    }

    /// Count a failed result in the error metrics
    fn observe<T>(&self, result: Result<T, RpcError>) -> Result<T, RpcError> {
        if let (Err(err), Some(metrics)) = (&result, &self.metrics) {
            metrics.record_error(err.kind());
        }
        result
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("origin"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers([header::CONTENT_LENGTH])
}

/// Create RPC server router
///
/// The rate limiter, when given, sits inside the CORS layer so rejected
/// requests still carry CORS headers.
pub fn create_router(state: RpcState, rate_limit: Option<RateLimitLayer>) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Metrics endpoint
        .route("/metrics", get(handlers::metrics))
        // Commission endpoints
        .route(
            "/commissions",
            get(handlers::list_commissions).post(handlers::create_commission),
        )
        .route(
            "/commissions/{id}",
            get(handlers::get_commission)
                .patch(handlers::update_status)
                .delete(handlers::delete_commission),
        );

    if let Some(RateLimitLayer { limiter }) = rate_limit {
        let metrics = state.metrics.clone();
        router = router.layer(axum::middleware::from_fn(
            move |request: Request, next: Next| {
                rate_limit_middleware(limiter.clone(), metrics.clone(), request, next)
            },
        ));
    }

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the RPC server, stopping gracefully once `shutdown` resolves
pub async fn start_server<F>(
    state: RpcState,
    addr: &str,
    rate_limit: Option<RateLimitLayer>,
    shutdown: F,
) -> Result<(), RpcError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RpcError::ServerError(e.to_string()))?;

    let cleanup = rate_limit
        .as_ref()
        .map(|layer| layer.spawn_cleanup(RATE_LIMIT_CLEANUP_INTERVAL));
    let router = create_router(state, rate_limit);

    tracing::info!("RPC server listening on {}", addr);

    let served = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|e| RpcError::ServerError(e.to_string()));

    if let Some(cleanup) = cleanup {
        cleanup.abort();
    }
    served
}

