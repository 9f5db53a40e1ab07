//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AuthService, DomainService, SuggestionService, WizardService,
};

/// Services shared by all requests.
///
/// Everything here is immutable after startup; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    pub suggestion_service: Arc<SuggestionService>,
    pub domain_service: Arc<DomainService>,
    pub wizard_service: Arc<WizardService>,
    pub auth_service: Arc<AuthService>,
    /// `"production"` or `"development"`.
    pub environment: &'static str,
}
