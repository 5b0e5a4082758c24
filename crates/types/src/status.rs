use serde::{Deserialize, Serialize};
use std::fmt;

/// Commission lifecycle status
///
/// Any admin-chosen label is accepted; only `in_progress` and `completed`
/// carry notification semantics. Serialized as the plain label string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommissionStatus {
    /// Initial state, set by the store on insert
    #[default]
    Queued,
    /// Work has started
    InProgress,
    /// Work is finished, awaiting payment before delivery
    Completed,
    /// Any other label set by an administrator
    Other(String),
}

impl CommissionStatus {
    pub const QUEUED: &'static str = "queued";
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const COMPLETED: &'static str = "completed";

    /// Parse a label, trimming surrounding whitespace
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            Self::QUEUED => Self::Queued,
            Self::IN_PROGRESS => Self::InProgress,
            Self::COMPLETED => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => Self::QUEUED,
            Self::InProgress => Self::IN_PROGRESS,
            Self::Completed => Self::COMPLETED,
            Self::Other(label) => label,
        }
    }

    /// Whether the label is blank and therefore not a usable status
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl fmt::Display for CommissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CommissionStatus {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for CommissionStatus {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<CommissionStatus> for String {
    fn from(status: CommissionStatus) -> Self {
        match status {
            CommissionStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(CommissionStatus::parse("queued"), CommissionStatus::Queued);
        assert_eq!(
            CommissionStatus::parse(" in_progress "),
            CommissionStatus::InProgress
        );
        assert_eq!(
            CommissionStatus::parse("completed"),
            CommissionStatus::Completed
        );
    }

    #[test]
    fn test_custom_label_is_preserved() {
        let status = CommissionStatus::parse("on_hold");
        assert_eq!(status, CommissionStatus::Other("on_hold".to_string()));
        assert_eq!(status.to_string(), "on_hold");
        assert!(!status.is_blank());
    }

    #[test]
    fn test_blank_label() {
        assert!(CommissionStatus::parse("   ").is_blank());
        assert!(!CommissionStatus::Queued.is_blank());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&CommissionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let status: CommissionStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, CommissionStatus::Other("paused".to_string()));
    }
}
