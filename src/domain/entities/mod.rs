//! Core domain entities.
//!
//! All persistent entities are owned by the external PostgreSQL database. The
//! service only holds request-scoped copies of them.
//!
//! # Entity Types
//!
//! - [`SaasService`] - A partner-branded tenant service
//! - [`Customer`] - A customer belonging to exactly one tenant service
//! - [`Tld`] - A top-level domain offering with price and priority
//! - [`DomainSuggestion`] - An ephemeral, not persisted suggestion
//! - [`DomainRegistration`] - A registration attempt for a customer
//!
//! Creation inputs use separate `New*` structs, like `NewCustomer` and
//! `NewRegistration`.

pub mod customer;
pub mod registration;
pub mod saas_service;
pub mod suggestion;
pub mod tld;

pub use customer::{Customer, NewCustomer};
pub use registration::{DomainRegistration, NewRegistration, RegistrationStatus};
pub use saas_service::SaasService;
pub use suggestion::{DomainSuggestion, RECOMMENDED_PRIORITY};
pub use tld::Tld;
