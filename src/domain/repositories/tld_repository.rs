//! Repository trait for TLD offerings.

use crate::domain::entities::Tld;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to TLD offerings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTldRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TldRepository: Send + Sync {
    /// Lists all active TLDs ordered by priority descending, then sort order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_active(&self) -> Result<Vec<Tld>, AppError>;

    /// Finds a TLD by its name (without leading dot).
    ///
    /// Inactive TLDs are returned as well; callers decide what to do with them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Tld>, AppError>;

    /// Returns up to `limit` active TLDs recommended for a country.
    ///
    /// The country is currently a pass-through hook: the result is the top
    /// active TLDs by priority for every country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recommended_for_country(&self, country: &str, limit: i64)
    -> Result<Vec<Tld>, AppError>;
}
