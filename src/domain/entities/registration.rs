//! Domain registration entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of a registration.
///
/// The registration flow only ever writes `Registered` or `Failed`; `Pending`
/// and `Cancelled` are set through the status update operation when the
/// registrar reports asynchronous changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Registered,
    Failed,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Registered => "registered",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "registered" => Ok(Self::Registered),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown registration status '{}'", other)),
        }
    }
}

/// A domain registration attempt owned by one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRegistration {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Name part before the TLD, e.g. `"my.company"` for `"my.company.de"`.
    pub requested_name: String,
    pub tld: String,
    pub domain: String,
    /// Sell price at the time of registration.
    pub sell_price: f64,
    pub status: RegistrationStatus,
    /// Outbound registrar request payload.
    pub registrar_request: Option<Value>,
    /// Inbound registrar response payload.
    pub registrar_response: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for persisting a registration.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub customer_id: Uuid,
    pub requested_name: String,
    pub tld: String,
    pub domain: String,
    pub sell_price: f64,
    pub status: RegistrationStatus,
    pub registrar_request: Option<Value>,
    pub registrar_response: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "registered".parse::<RegistrationStatus>(),
            Ok(RegistrationStatus::Registered)
        );
        assert_eq!(
            "cancelled".parse::<RegistrationStatus>(),
            Ok(RegistrationStatus::Cancelled)
        );
        assert!("Registered".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&RegistrationStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");

        let status: RegistrationStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, RegistrationStatus::Pending);
    }
}
