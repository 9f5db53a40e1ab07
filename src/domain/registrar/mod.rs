//! Registrar port.
//!
//! The registrar is the single source of truth for domain availability. This
//! module defines what the application expects from it; the JSON-RPC client
//! lives in `crate::infrastructure::registrar`.
//!
//! Every logical flow gets its own [`Registrar`] from a [`RegistrarProvider`]
//! and wraps it in a [`RegistrarSession`], which guarantees that logout is
//! attempted exactly once on every exit path.

pub mod session;

pub use session::RegistrarSession;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Remote result code signalling success.
pub const SUCCESS_CODE: i64 = 1000;

/// Errors raised by registrar calls that are allowed to fail.
///
/// Availability checks never return these; they are folded into
/// [`AvailabilityResult`] instead.
#[derive(Debug, Clone, Error)]
pub enum RegistrarError {
    #[error("registrar transport error: {0}")]
    Transport(String),

    #[error("registrar call timed out after {0}s")]
    Timeout(u64),

    #[error("invalid registrar response: {0}")]
    InvalidResponse(String),

    #[error("registrar error {code}: {message}")]
    Remote { code: i64, message: String },
}

/// Outcome category of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Registered,
    Error,
}

/// Structured result of a single availability check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityResult {
    pub domain: String,
    pub available: bool,
    pub status: AvailabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvailabilityResult {
    /// Result for a domain whose check could not be completed.
    pub fn failed(domain: &str, error: impl Into<String>) -> Self {
        Self {
            domain: domain.to_string(),
            available: false,
            status: AvailabilityStatus::Error,
            price: None,
            error: Some(error.into()),
        }
    }
}

/// Registrant contact data handed to the registrar on registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistrantData {
    pub name: String,
    pub email: String,
    pub country_code: String,
}

/// Result of a registration call, stored verbatim as the registrar response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationOutcome {
    pub success: bool,
    pub domain: String,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A stateful registrar connection owned by one logical flow.
///
/// Implementations keep a private session id and must not be shared between
/// concurrent flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Opens a remote session.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError`] if the remote rejects the credentials or is unreachable.
    async fn login(&self) -> Result<(), RegistrarError>;

    /// Closes the remote session. A no-op when not logged in.
    ///
    /// The local session id is cleared even if the remote call fails.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError`] if the remote call fails.
    async fn logout(&self) -> Result<(), RegistrarError>;

    /// Checks whether `domain` can be registered.
    ///
    /// Logs in lazily when no session exists. Never fails: transport and
    /// remote errors are reported with [`AvailabilityStatus::Error`].
    async fn check_domain(&self, domain: &str) -> AvailabilityResult;

    /// Checks each domain in order, one call at a time.
    ///
    /// Returns exactly one result per input entry, duplicates included.
    async fn check_domains(&self, domains: &[String]) -> Vec<AvailabilityResult> {
        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            results.push(self.check_domain(domain).await);
        }
        results
    }

    /// Registers `domain` for the given registrant.
    async fn register_domain(
        &self,
        domain: &str,
        registrant: &RegistrantData,
    ) -> RegistrationOutcome;
}

/// Hands out a fresh [`Registrar`] per logical flow.
#[cfg_attr(test, mockall::automock)]
pub trait RegistrarProvider: Send + Sync {
    fn open(&self) -> Arc<dyn Registrar>;
}
