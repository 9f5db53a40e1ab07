//! Repository trait for customers.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Access to customers of all tenant services.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Finds a customer by id regardless of tenant.
    ///
    /// Only used for registration ownership checks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError>;

    /// Finds a customer by id within one tenant service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id_and_service(
        &self,
        id: Uuid,
        saas_service_id: Uuid,
    ) -> Result<Option<Customer>, AppError>;

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;
}
