//! DTOs for the wizard start endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::{Customer, SaasService};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerItem {
    pub id: Uuid,
    pub saas_service_id: Uuid,
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub sector: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            saas_service_id: c.saas_service_id,
            name: c.name,
            email: c.email,
            country_code: c.country_code,
            sector: c.sector,
            last_synced_at: c.last_synced_at,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaasServiceItem {
    pub id: Uuid,
    pub key: String,
    pub name: String,
    pub is_active: bool,
    pub whitelabel_config: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SaasService> for SaasServiceItem {
    fn from(s: SaasService) -> Self {
        Self {
            id: s.id,
            key: s.key,
            name: s.name,
            is_active: s.is_active,
            whitelabel_config: s.whitelabel_config,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Customer and tenant data needed by the wizard frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStartResponse {
    pub customer: CustomerItem,
    pub saas_service: SaasServiceItem,
}
