//! JSON-RPC client for the INWX domain registrar.
//!
//! Every call is a `POST` of a JSON-RPC 2.0 envelope:
//!
//! ```json
//! { "jsonrpc": "2.0", "method": "domain.check", "params": { "domain": "example.de" }, "id": 1 }
//! ```
//!
//! The remote answers with `{"result": {"code": 1000, "msg": "...", "resData": {...}}}`.
//! A top-level `error` member or an embedded `code` other than
//! [`SUCCESS_CODE`] is an application-level failure, distinct from
//! transport failures.
//!
//! The session id returned by `account.login` is sent back as the
//! `domrobot` cookie on later calls.

use async_trait::async_trait;
use reqwest::header::COOKIE;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::registrar::{
    AvailabilityResult, AvailabilityStatus, RegistrantData, Registrar, RegistrarError,
    RegistrarProvider, RegistrationOutcome, SUCCESS_CODE,
};

/// Connection settings for the registrar API.
#[derive(Debug, Clone)]
pub struct RegistrarSettings {
    pub api_url: String,
    pub username: String,
    pub password: String,
    /// Per-call timeout.
    pub timeout: Duration,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

/// A stateful INWX connection owned by one logical flow.
pub struct InwxRegistrar {
    http: reqwest::Client,
    settings: Arc<RegistrarSettings>,
    session_id: Mutex<Option<String>>,
    next_id: AtomicU64,
}

impl InwxRegistrar {
    pub fn new(http: reqwest::Client, settings: Arc<RegistrarSettings>) -> Self {
        Self {
            http,
            settings,
            session_id: Mutex::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_session().is_some()
    }

    fn current_session(&self) -> Option<String> {
        self.session_id
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_session(&self, session: Option<String>) -> Option<String> {
        let mut guard = self
            .session_id
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, session)
    }

    /// Performs one JSON-RPC call and returns its `result` member.
    async fn call(
        &self,
        method: &str,
        params: Value,
        session: Option<&str>,
    ) -> Result<Value, RegistrarError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };

        tracing::debug!(method, "Registrar call");

        let mut builder = self
            .http
            .post(&self.settings.api_url)
            .timeout(self.settings.timeout)
            .json(&request);
        if let Some(session) = session {
            builder = builder.header(COOKIE, format!("domrobot={}", session));
        }

        let response = builder
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.map_transport_error(e))?;

        let data: Value = response
            .json()
            .await
            .map_err(|e| RegistrarError::InvalidResponse(e.to_string()))?;

        if let Some(error) = data.get("error").filter(|e| !e.is_null()) {
            return Err(RegistrarError::Remote {
                code: error.get("code").and_then(Value::as_i64).unwrap_or(-1),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string()),
            });
        }

        Ok(data.get("result").cloned().unwrap_or_else(|| json!({})))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> RegistrarError {
        if e.is_timeout() {
            RegistrarError::Timeout(self.settings.timeout.as_secs())
        } else {
            RegistrarError::Transport(e.to_string())
        }
    }

    async fn query_availability(&self, domain: &str) -> Result<AvailabilityResult, RegistrarError> {
        let session = self.current_session();
        let result = self
            .call("domain.check", json!({ "domain": domain }), session.as_deref())
            .await?;

        let code = result_code(&result);
        if code != Some(SUCCESS_CODE) {
            return Ok(AvailabilityResult::failed(domain, result_message(&result)));
        }

        let res_data = result.get("resData").cloned().unwrap_or_else(|| json!({}));
        // Multi-domain responses wrap each entry in `resData.domain[]`.
        let entry = res_data
            .get("domain")
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .unwrap_or(&res_data);

        let available = entry.get("avail").and_then(Value::as_i64) == Some(1);

        Ok(AvailabilityResult {
            domain: domain.to_string(),
            available,
            status: if available {
                AvailabilityStatus::Available
            } else {
                AvailabilityStatus::Registered
            },
            price: entry.get("price").and_then(Value::as_f64),
            error: None,
        })
    }
}

fn result_code(result: &Value) -> Option<i64> {
    result.get("code").and_then(Value::as_i64)
}

fn result_message(result: &Value) -> String {
    result
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("unknown registrar error")
        .to_string()
}

#[async_trait]
impl Registrar for InwxRegistrar {
    async fn login(&self) -> Result<(), RegistrarError> {
        let result = self
            .call(
                "account.login",
                json!({
                    "user": self.settings.username,
                    "pass": self.settings.password,
                }),
                None,
            )
            .await?;

        let code = result_code(&result);
        if code != Some(SUCCESS_CODE) {
            return Err(RegistrarError::Remote {
                code: code.unwrap_or(-1),
                message: result_message(&result),
            });
        }

        let session = result
            .pointer("/resData/sessid")
            .and_then(Value::as_str)
            .ok_or_else(|| RegistrarError::InvalidResponse("login without session id".into()))?;

        self.set_session(Some(session.to_string()));
        tracing::debug!("Registrar session opened");
        Ok(())
    }

    async fn logout(&self) -> Result<(), RegistrarError> {
        let Some(session) = self.set_session(None) else {
            return Ok(());
        };

        self.call("account.logout", json!({}), Some(&session))
            .await?;
        tracing::debug!("Registrar session closed");
        Ok(())
    }

    async fn check_domain(&self, domain: &str) -> AvailabilityResult {
        if !self.is_logged_in()
            && let Err(e) = self.login().await
        {
            tracing::warn!(domain, "Registrar login before check failed: {}", e);
            return AvailabilityResult::failed(domain, e.to_string());
        }

        match self.query_availability(domain).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(domain, "Availability check failed: {}", e);
                AvailabilityResult::failed(domain, e.to_string())
            }
        }
    }

    async fn register_domain(
        &self,
        domain: &str,
        _registrant: &RegistrantData,
    ) -> RegistrationOutcome {
        // Stand-in for `domain.create`: no remote call is made.
        tracing::info!(domain, "Simulated domain registration");

        RegistrationOutcome {
            success: true,
            domain: domain.to_string(),
            status: "pending".to_string(),
            message: "Simulated registration, no registrar call was made".to_string(),
            registration_id: Some(format!("fake-reg-{}", domain)),
            error: None,
        }
    }
}

/// Creates an [`InwxRegistrar`] per flow over a shared HTTP connection pool.
///
/// Sessions are carried per registrar instance, so sharing the
/// `reqwest::Client` does not share sessions.
pub struct InwxRegistrarProvider {
    http: reqwest::Client,
    settings: Arc<RegistrarSettings>,
}

impl InwxRegistrarProvider {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(settings: RegistrarSettings) -> Result<Self, RegistrarError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RegistrarError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }
}

impl RegistrarProvider for InwxRegistrarProvider {
    fn open(&self) -> Arc<dyn Registrar> {
        Arc::new(InwxRegistrar::new(self.http.clone(), self.settings.clone()))
    }
}
