//! Repository trait definitions for the domain layer.
//!
//! These traits describe the external data store as typed operations. The
//! PostgreSQL implementations live in `crate::infrastructure::persistence`
//! and never leak raw rows past their boundary.
//!
//! # Available Repositories
//!
//! - [`SaasServiceRepository`] - Tenant service lookups
//! - [`CustomerRepository`] - Customer lookups and creation
//! - [`TldRepository`] - TLD offerings and ranking
//! - [`RegistrationRepository`] - Registration records
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod customer_repository;
pub mod registration_repository;
pub mod saas_service_repository;
pub mod tld_repository;

pub use customer_repository::CustomerRepository;
pub use registration_repository::RegistrationRepository;
pub use saas_service_repository::SaasServiceRepository;
pub use tld_repository::TldRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
#[cfg(test)]
pub use saas_service_repository::MockSaasServiceRepository;
#[cfg(test)]
pub use tld_repository::MockTldRepository;
