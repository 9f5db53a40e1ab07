//! Business logic services for the application layer.

pub mod auth_service;
pub mod domain_service;
pub mod suggestion_service;
mod tenant;
pub mod wizard_service;

pub use auth_service::AuthService;
pub use domain_service::{DomainCheck, DomainService, RegistrationResult};
pub use suggestion_service::{SuggestionList, SuggestionService};
pub use wizard_service::{WizardService, WizardStart};
