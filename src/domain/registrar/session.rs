//! Scoped registrar session.

use std::sync::Arc;

use super::{AvailabilityResult, RegistrantData, Registrar, RegistrarError, RegistrationOutcome};

/// A logged-in registrar session that is released on every exit path.
///
/// - [`RegistrarSession::open`] logs in. If login fails, logout is still
///   attempted once before the login error is returned.
/// - [`RegistrarSession::close`] logs out exactly once. Logout failures are
///   logged and never replace the caller's result.
/// - Dropping a session that was not closed (early `?` return, cancelled
///   request future) spawns a best-effort logout on the current Tokio runtime.
///
/// # Example
///
/// ```rust,ignore
/// let session = RegistrarSession::open(provider.open()).await?;
/// let result = session.check_domain("example.de").await;
/// session.close().await;
/// ```
pub struct RegistrarSession {
    registrar: Arc<dyn Registrar>,
    released: bool,
}

impl RegistrarSession {
    /// Logs in and returns the guarded session.
    ///
    /// # Errors
    ///
    /// Returns the login error after the logout attempt.
    pub async fn open(registrar: Arc<dyn Registrar>) -> Result<Self, RegistrarError> {
        let session = Self {
            registrar,
            released: false,
        };

        if let Err(e) = session.registrar.login().await {
            tracing::warn!("Registrar login failed: {}", e);
            session.close().await;
            return Err(e);
        }

        Ok(session)
    }

    /// Logs out and consumes the session.
    pub async fn close(mut self) {
        self.released = true;
        if let Err(e) = self.registrar.logout().await {
            tracing::warn!("Registrar logout failed: {}", e);
        }
    }

    pub async fn check_domain(&self, domain: &str) -> AvailabilityResult {
        self.registrar.check_domain(domain).await
    }

    pub async fn check_domains(&self, domains: &[String]) -> Vec<AvailabilityResult> {
        self.registrar.check_domains(domains).await
    }

    pub async fn register_domain(
        &self,
        domain: &str,
        registrant: &RegistrantData,
    ) -> RegistrationOutcome {
        self.registrar.register_domain(domain, registrant).await
    }
}

impl Drop for RegistrarSession {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let registrar = self.registrar.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = registrar.logout().await {
                        tracing::warn!("Registrar logout after abandoned session failed: {}", e);
                    }
                });
            }
            Err(_) => {
                tracing::warn!("Registrar session dropped outside a runtime, logout skipped");
            }
        }
    }
}
