use clap::{Args, Parser, Subcommand};
use plexdi_notify::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_FROM_ADDRESS, DEFAULT_RESEND_ENDPOINT, NotifyConfig,
};
use plexdi_store::PoolConfig;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "plexdi")]
#[command(version, about = "Plexdi Studio - commission intake and notification service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the commission server
    Start(Box<StartConfig>),
    /// Display version information
    Version,
}

#[derive(Args)]
pub struct StartConfig {
    /// RPC listen host
    #[arg(long = "rpc.host", env = "HOST", default_value = "0.0.0.0")]
    pub rpc_host: String,

    /// RPC listen port
    #[arg(long = "rpc.port", env = "PORT", default_value = "8080")]
    pub rpc_port: u16,

    /// PostgreSQL connection URL
    #[arg(long = "db.url", env = "DATABASE_URL", hide_env_values = true)]
    pub db_url: String,

    /// Maximum pooled database connections
    #[arg(long = "db.max-connections", env = "DB_MAX_CONNECTIONS", default_value = "5")]
    pub db_max_connections: u32,

    /// Database connect timeout in seconds
    #[arg(long = "db.connect-timeout", default_value = "5")]
    pub db_connect_timeout: u64,

    /// Enable debug logging
    #[arg(long = "log.debug")]
    pub debug: bool,

    /// Expose Prometheus metrics on /metrics
    #[arg(long = "metrics.enable")]
    pub metrics_enable: bool,

    /// Requests allowed in a burst per client IP
    #[arg(long = "rate.burst", default_value = "5")]
    pub rate_burst: u32,

    /// Milliseconds to replenish one request token
    #[arg(long = "rate.period-ms", default_value = "2000")]
    pub rate_period_ms: u64,

    #[command(flatten)]
    pub mail: MailConfig,
}

/// Email delivery configuration
#[derive(Args)]
pub struct MailConfig {
    /// Resend API key; email is disabled without it
    #[arg(long = "mail.api-key", env = "RESEND_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Resend API endpoint
    #[arg(long = "mail.endpoint", env = "RESEND_ENDPOINT", default_value = DEFAULT_RESEND_ENDPOINT)]
    pub endpoint: String,

    /// Sender address
    #[arg(long = "mail.from", env = "MAIL_FROM", default_value = DEFAULT_FROM_ADDRESS)]
    pub from: String,

    /// Studio administrator address
    #[arg(long = "mail.admin", env = "ADMIN_EMAIL", default_value = DEFAULT_ADMIN_ADDRESS)]
    pub admin: String,

    /// Per-send timeout in seconds
    #[arg(long = "mail.timeout", default_value = "10")]
    pub timeout: u64,
}

impl StartConfig {
    pub fn rpc_addr(&self) -> String {
        format!("{}:{}", self.rpc_host, self.rpc_port)
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(
            self.db_max_connections,
            Duration::from_secs(self.db_connect_timeout),
        )
    }

    pub fn rate_period(&self) -> Duration {
        Duration::from_millis(self.rate_period_ms)
    }
}

impl MailConfig {
    /// API key, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn notify_config(&self) -> NotifyConfig {
        NotifyConfig::new(self.from.as_str(), self.admin.as_str())
            .with_send_timeout(self.send_timeout())
    }
}
