//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! registrar sessions, and business rules. Services consume repository and
//! registrar traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::suggestion_service::SuggestionService`] - Domain name suggestions
//! - [`services::domain_service::DomainService`] - Availability checks and registrations
//! - [`services::wizard_service::WizardService`] - Wizard start for a tenant customer
//! - [`services::auth_service::AuthService`] - Client token authentication

pub mod services;
