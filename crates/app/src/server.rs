use plexdi_lifecycle::LifecycleController;
use plexdi_notify::{DisabledTransport, Dispatcher, ResendTransport, Transport};
use plexdi_rpc::{Metrics, RateLimitLayer, RpcState};
use plexdi_store::PgCommissionStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::{MailConfig, StartConfig};

/// Initialize tracing subscriber
pub fn init_tracing(debug: bool) {
    // RUST_LOG overrides the default level in both modes
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Pick the email transport for the configured credentials
fn build_transport(mail: &MailConfig) -> anyhow::Result<Arc<dyn Transport>> {
    match mail.api_key() {
        Some(key) => {
            let transport = ResendTransport::new(key, mail.endpoint.as_str(), mail.send_timeout())?;
            tracing::info!("  Mail: Resend → {}", mail.endpoint);
            Ok(Arc::new(transport))
        }
        None => {
            tracing::warn!("⚠️  No Resend API key configured. Email notifications are disabled.");
            tracing::warn!("    Set RESEND_API_KEY or --mail.api-key=<key> to enable them.");
            Ok(Arc::new(DisabledTransport))
        }
    }
}

/// Resolve on Ctrl+C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Start the Plexdi commission server
pub async fn start_server(config: &StartConfig) -> anyhow::Result<()> {
    let rpc_addr = config.rpc_addr();

    tracing::info!("🚀 Starting Plexdi Studio server");
    tracing::info!("  RPC:   {}", rpc_addr);
    tracing::info!("  Admin: {}", config.mail.admin);

    let store = PgCommissionStore::connect(&config.db_url, config.pool_config()).await?;
    tracing::info!("  ✓ Commission schema ready");

    let transport = build_transport(&config.mail)?;
    let dispatcher = Dispatcher::new(transport, config.mail.notify_config())?;
    let controller = LifecycleController::new(Arc::new(store), dispatcher);

    let state = if config.metrics_enable {
        tracing::info!("  📊 Metrics enabled on /metrics");
        RpcState::new_with_metrics(controller, Metrics::new()?)
    } else {
        RpcState::new(controller)
    };

    let rate_limit = RateLimitLayer::new(config.rate_burst, config.rate_period())?;
    tracing::info!(
        "  Rate limit: burst {} per client, 1 every {}ms",
        config.rate_burst,
        config.rate_period_ms
    );

    tracing::info!("✅ Plexdi Studio server started");
    tracing::info!("Press Ctrl+C to stop");

    plexdi_rpc::start_server(state, &rpc_addr, Some(rate_limit), shutdown_signal()).await?;

    tracing::info!("RPC server stopped");
    Ok(())
}
