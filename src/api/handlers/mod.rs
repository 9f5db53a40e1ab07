//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod domains;
pub mod health;
pub mod registrations;
pub mod wizard;

pub use domains::{check_handler, register_handler, suggest_handler};
pub use health::{health_handler, root_handler};
pub use registrations::{customer_registrations_handler, update_registration_handler};
pub use wizard::wizard_start_handler;
