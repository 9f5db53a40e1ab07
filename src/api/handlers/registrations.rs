//! Handlers for registration records.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::api::dto::registration::{
    RegistrationItem, RegistrationListResponse, UpdateRegistrationRequest,
};
use crate::api::middleware::auth::Tenant;
use crate::error::AppError;
use crate::state::AppState;

/// Lists a customer's registrations, newest first.
///
/// # Endpoint
///
/// `GET /customers/{customerId}/registrations`
///
/// # Errors
///
/// Returns 404 if the customer does not exist for the caller's tenant.
pub async fn customer_registrations_handler(
    Path(customer_id): Path<Uuid>,
    Extension(Tenant(tenant_key)): Extension<Tenant>,
    State(state): State<AppState>,
) -> Result<Json<RegistrationListResponse>, AppError> {
    let registrations = state
        .domain_service
        .registrations_for_customer(customer_id, &tenant_key)
        .await?;

    Ok(Json(RegistrationListResponse {
        items: registrations.into_iter().map(Into::into).collect(),
    }))
}

/// Updates the status of a registration.
///
/// # Endpoint
///
/// `PATCH /registrations/{id}`
///
/// # Request Body
///
/// ```json
/// { "status": "cancelled", "registrarResponse": { "code": 1000 } }
/// ```
///
/// # Errors
///
/// Returns 404 if the registration does not exist or belongs to a customer
/// of another tenant.
pub async fn update_registration_handler(
    Path(id): Path<Uuid>,
    Extension(Tenant(tenant_key)): Extension<Tenant>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateRegistrationRequest>,
) -> Result<Json<RegistrationItem>, AppError> {
    let registration = state
        .domain_service
        .update_registration_status(
            id,
            &tenant_key,
            payload.status,
            payload.registrar_response,
        )
        .await?;

    Ok(Json(registration.into()))
}
