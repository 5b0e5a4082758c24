use std::time::Duration;

/// Connection pool configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// How long to wait for a connection before giving up
    pub connect_timeout: Duration,
}

impl PoolConfig {
    #[must_use]
    pub const fn new(max_connections: u32, connect_timeout: Duration) -> Self {
        Self {
            max_connections,
            connect_timeout,
        }
    }

    /// Validate configuration parameters
    pub const fn validate(&self) -> Result<(), &'static str> {
        if self.max_connections == 0 {
            Err("max_connections must be greater than 0")
        } else if self.connect_timeout.is_zero() {
            Err("connect_timeout must be greater than 0")
        } else {
            Ok(())
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(5))
    }
}
