//! DTOs for registration records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, serde_as};
use uuid::Uuid;

use crate::domain::entities::{DomainRegistration, RegistrationStatus};

/// A stored registration record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationItem {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub requested_name: String,
    pub tld: String,
    pub domain: String,
    pub sell_price: f64,
    pub status: RegistrationStatus,
    pub registrar_request: Option<Value>,
    pub registrar_response: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DomainRegistration> for RegistrationItem {
    fn from(r: DomainRegistration) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            requested_name: r.requested_name,
            tld: r.tld,
            domain: r.domain,
            sell_price: r.sell_price,
            status: r.status,
            registrar_request: r.registrar_request,
            registrar_response: r.registrar_response,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Registrations of one customer, newest first.
#[derive(Debug, Serialize)]
pub struct RegistrationListResponse {
    pub items: Vec<RegistrationItem>,
}

/// Request body for `PATCH /registrations/{id}`.
///
/// `registrarResponse` replaces the stored response when present; when
/// absent or `null` the stored response is kept.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    /// One of `pending`, `registered`, `failed`, `cancelled`.
    #[serde_as(as = "DisplayFromStr")]
    pub status: RegistrationStatus,

    #[serde(default)]
    pub registrar_response: Option<Value>,
}
