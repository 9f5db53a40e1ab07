//! PostgreSQL repository implementations.
//!
//! Queries are checked at runtime and decoded into private `FromRow` records,
//! which are converted into domain entities before they leave this module.
//!
//! # Repositories
//!
//! - [`PgSaasServiceRepository`] - Tenant service lookups
//! - [`PgCustomerRepository`] - Customer storage
//! - [`PgTldRepository`] - TLD offerings
//! - [`PgRegistrationRepository`] - Registration records

pub mod pg_customer_repository;
pub mod pg_registration_repository;
pub mod pg_saas_service_repository;
pub mod pg_tld_repository;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_registration_repository::PgRegistrationRepository;
pub use pg_saas_service_repository::PgSaasServiceRepository;
pub use pg_tld_repository::PgTldRepository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Builds the shared connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
}
