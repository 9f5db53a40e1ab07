//! Repository trait for tenant services.

use crate::domain::entities::SaasService;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to tenant services.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSaasServiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaasServiceRepository: Send + Sync {
    /// Finds a tenant service by its unique key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<SaasService>, AppError>;

    /// Finds a tenant service by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SaasService>, AppError>;
}
