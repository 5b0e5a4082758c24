use std::time::Duration;

pub const DEFAULT_FROM_ADDRESS: &str = "noreply@plexdistudio.com";
pub const DEFAULT_ADMIN_ADDRESS: &str = "studio@plexdistudio.com";
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Notification addressing and delivery limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Sender address on every outbound email
    pub from_address: String,
    /// Fixed studio administrator recipient
    pub admin_address: String,
    /// Per-send ceiling
    pub send_timeout: Duration,
}

impl NotifyConfig {
    pub fn new(from_address: impl Into<String>, admin_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
            admin_address: admin_address.into(),
            send_timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_send_timeout(mut self, send_timeout: Duration) -> Self {
        self.send_timeout = send_timeout;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.from_address.contains('@') {
            Err("from_address must be an email address")
        } else if !self.admin_address.contains('@') {
            Err("admin_address must be an email address")
        } else if self.send_timeout.is_zero() {
            Err("send_timeout must be greater than 0")
        } else {
            Ok(())
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_ADDRESS, DEFAULT_ADMIN_ADDRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_validation() {
        let config = NotifyConfig::default();
        assert_eq!(config.from_address, DEFAULT_FROM_ADDRESS);
        assert_eq!(config.admin_address, DEFAULT_ADMIN_ADDRESS);
        assert_eq!(config.send_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert!(NotifyConfig::new("noreply", "admin@x.com").validate().is_err());
        assert!(NotifyConfig::new("noreply@x.com", "").validate().is_err());
        assert!(
            NotifyConfig::default()
                .with_send_timeout(Duration::ZERO)
                .validate()
                .is_err()
        );
    }
}
