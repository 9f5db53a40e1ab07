//! API route configuration.
//!
//! All API endpoints require client token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    check_handler, customer_registrations_handler, register_handler, suggest_handler,
    update_registration_handler, wizard_start_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All API routes, protected by client token authentication.
///
/// # Endpoints
///
/// - `GET   /wizard/start/{customerId}`             - Customer and tenant for the wizard
/// - `POST  /domains/suggest`                       - Ranked domain suggestions
/// - `POST  /domains/check`                         - Availability check (batch)
/// - `POST  /domains/register`                      - Register a domain for a customer
/// - `GET   /customers/{customerId}/registrations`  - Registrations of a customer
/// - `PATCH /registrations/{id}`                    - Update a registration status
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/wizard/start/{customer_id}", get(wizard_start_handler))
        .route("/domains/suggest", post(suggest_handler))
        .route("/domains/check", post(check_handler))
        .route("/domains/register", post(register_handler))
        .route(
            "/customers/{customer_id}/registrations",
            get(customer_registrations_handler),
        )
        .route("/registrations/{id}", patch(update_registration_handler))
}
