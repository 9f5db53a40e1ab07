//! Tenant-scoped customer lookup shared by the services.

use crate::domain::entities::{Customer, SaasService};
use crate::domain::repositories::{CustomerRepository, SaasServiceRepository};
use crate::error::AppError;
use serde_json::json;
use uuid::Uuid;

/// Resolves the tenant service for `tenant_key`.
///
/// A key that passed authentication but has no row is a misconfiguration,
/// so it maps to [`AppError::Internal`].
pub(crate) async fn resolve_tenant(
    saas_service_repository: &dyn SaasServiceRepository,
    tenant_key: &str,
) -> Result<SaasService, AppError> {
    saas_service_repository
        .find_by_key(tenant_key)
        .await?
        .ok_or_else(|| {
            tracing::error!(tenant_key, "Tenant service missing from database");
            AppError::internal(
                format!("SaaS service '{}' not found in database", tenant_key),
                json!({ "tenant_key": tenant_key }),
            )
        })
}

/// Loads a customer only if it belongs to `saas_service`.
pub(crate) async fn tenant_customer(
    customer_repository: &dyn CustomerRepository,
    customer_id: Uuid,
    saas_service: &SaasService,
) -> Result<Customer, AppError> {
    customer_repository
        .find_by_id_and_service(customer_id, saas_service.id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                format!(
                    "Customer {} not found for service {}",
                    customer_id, saas_service.key
                ),
                json!({ "customer_id": customer_id, "tenant_key": saas_service.key }),
            )
        })
}
