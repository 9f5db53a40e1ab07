//! Tenant service entity.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// A partner-branded service instance (tenant).
///
/// Customers and their data are always scoped to exactly one tenant service.
/// Requests resolve their tenant by [`SaasService::key`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaasService {
    pub id: Uuid,
    /// Unique short name, e.g. `"handelshelfer"`.
    pub key: String,
    pub name: String,
    pub is_active: bool,
    /// Free-form branding configuration for the partner UI.
    pub whitelabel_config: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
