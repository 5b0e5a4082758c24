use crate::{CommissionId, CommissionStatus, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted commission record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    /// Store-assigned identifier
    pub id: CommissionId,
    /// Requester name
    pub name: String,
    /// Requester email, notification recipient
    pub email: String,
    /// Requester Discord handle
    pub discord: String,
    /// Free-form request details
    pub details: String,
    /// Commission type (logo, banner, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Lifecycle status
    pub status: CommissionStatus,
    /// Insert timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Requested designers
    pub designers: String,
}

/// Fields supplied by a requester when creating a commission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub discord: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub designers: String,
}

impl NewCommission {
    /// Create a request with the required fields only
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_discord(mut self, discord: impl Into<String>) -> Self {
        self.discord = discord.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_designers(mut self, designers: impl Into<String>) -> Self {
        self.designers = designers.into();
        self
    }

    /// Check required fields and email shape
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::MissingField("type"));
        }
        if !is_addressable(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Trim surrounding whitespace from every field
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            discord: self.discord.trim().to_string(),
            kind: self.kind.trim().to_string(),
            details: self.details.trim().to_string(),
            designers: self.designers.trim().to_string(),
        }
    }
}

/// Minimal `local@domain.tld` shape check
fn is_addressable(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_minimal_request() {
        let request = NewCommission::new("Ana", "ana@example.com", "logo");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(
            NewCommission::new(" ", "ana@example.com", "logo").validate(),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            NewCommission::new("Ana", "", "logo").validate(),
            Err(ValidationError::MissingField("email"))
        );
        assert_eq!(
            NewCommission::new("Ana", "ana@example.com", "").validate(),
            Err(ValidationError::MissingField("type"))
        );
    }

    #[test]
    fn test_validate_email_shape() {
        for bad in [
            "ana",
            "ana@",
            "@example.com",
            "ana@example",
            "ana@@example.com",
            "ana @example.com",
            "ana@.com",
        ] {
            let request = NewCommission::new("Ana", bad, "logo");
            assert!(
                matches!(request.validate(), Err(ValidationError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let request: NewCommission =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@example.com","type":"logo"}"#)
                .unwrap();
        assert_eq!(request.kind, "logo");
        assert!(request.discord.is_empty());
        assert!(request.details.is_empty());
        assert!(request.designers.is_empty());
    }

    #[test]
    fn test_normalized_trims() {
        let request = NewCommission::new(" Ana ", " ana@example.com", "logo ")
            .with_discord(" ana#1 ")
            .normalized();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.kind, "logo");
        assert_eq!(request.discord, "ana#1");
    }

    #[test]
    fn test_commission_serializes_type_field() {
        let commission = Commission {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            discord: String::new(),
            details: String::new(),
            kind: "logo".to_string(),
            status: CommissionStatus::Queued,
            created_at: Utc::now(),
            designers: String::new(),
        };
        let value = serde_json::to_value(&commission).unwrap();
        assert_eq!(value["type"], "logo");
        assert_eq!(value["status"], "queued");
    }
}
