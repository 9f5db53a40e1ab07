//! Repository trait for domain registrations.

use crate::domain::entities::{DomainRegistration, NewRegistration, RegistrationStatus};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Persistence of registration records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRegistrationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persists a new registration record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, registration: NewRegistration)
    -> Result<DomainRegistration, AppError>;

    /// Finds a registration by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DomainRegistration>, AppError>;

    /// Lists all registrations of a customer, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_customer(&self, customer_id: Uuid)
    -> Result<Vec<DomainRegistration>, AppError>;

    /// Updates the lifecycle status, optionally replacing the stored registrar response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the registration does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        registrar_response: Option<Value>,
    ) -> Result<DomainRegistration, AppError>;
}
