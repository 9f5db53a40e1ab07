//! Handler for the wizard start endpoint.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::api::dto::wizard::WizardStartResponse;
use crate::api::middleware::auth::Tenant;
use crate::error::AppError;
use crate::state::AppState;

/// Loads the customer and tenant service for the wizard.
///
/// # Endpoint
///
/// `GET /wizard/start/{customerId}`
///
/// The tenant is the one the client token resolves to; customers of other
/// tenants are reported as not found.
///
/// # Errors
///
/// Returns 404 if the customer does not exist for the tenant.
/// Returns 500 if the tenant service is missing from the database.
pub async fn wizard_start_handler(
    Path(customer_id): Path<Uuid>,
    Extension(Tenant(tenant_key)): Extension<Tenant>,
    State(state): State<AppState>,
) -> Result<Json<WizardStartResponse>, AppError> {
    let start = state.wizard_service.start(customer_id, &tenant_key).await?;

    Ok(Json(WizardStartResponse {
        customer: start.customer.into(),
        saas_service: start.saas_service.into(),
    }))
}
