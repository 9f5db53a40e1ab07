//! Customer entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A customer of a tenant service.
///
/// Lookups are scoped by `(id, saas_service_id)` whenever tenant isolation
/// matters. Unscoped lookups by id are only used for registration ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub saas_service_id: Uuid,
    pub name: String,
    pub email: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    pub sector: Option<String>,
    /// Last synchronisation with the upstream company-data source.
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a customer.
///
/// The id is assigned by the upstream company-data source, not by this service.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub id: Uuid,
    pub saas_service_id: Uuid,
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub sector: Option<String>,
}
