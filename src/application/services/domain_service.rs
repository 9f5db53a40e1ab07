//! Availability checks and registrations against the registrar.

use std::sync::Arc;

use super::tenant::{resolve_tenant, tenant_customer};
use crate::domain::entities::{DomainRegistration, NewRegistration, RegistrationStatus};
use crate::domain::registrar::{RegistrantData, RegistrarProvider, RegistrarSession};
use crate::domain::repositories::{
    CustomerRepository, RegistrationRepository, SaasServiceRepository, TldRepository,
};
use crate::error::AppError;
use crate::utils::domain_name::{split_domain, tld_of};
use serde_json::{Value, json};
use uuid::Uuid;

/// Availability of one domain in a batch check.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainCheck {
    pub domain: String,
    pub available: bool,
    pub price: Option<f64>,
    pub error: Option<String>,
}

impl DomainCheck {
    fn failed(domain: &str, error: impl Into<String>) -> Self {
        Self {
            domain: domain.to_string(),
            available: false,
            price: None,
            error: Some(error.into()),
        }
    }
}

/// Outcome of a registration request.
///
/// A stored record with `success == false` means the registrar refused the
/// domain; the record then carries status `failed`.
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    pub success: bool,
    pub registration: DomainRegistration,
    pub error: Option<String>,
}

/// Orchestrates registrar calls with TLD pricing and registration records.
///
/// Every logical flow opens its own registrar through the provider and wraps
/// it in a [`RegistrarSession`], so concurrent requests never share a
/// registrar session.
pub struct DomainService {
    saas_service_repository: Arc<dyn SaasServiceRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
    tld_repository: Arc<dyn TldRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
    registrar_provider: Arc<dyn RegistrarProvider>,
}

impl DomainService {
    pub fn new(
        saas_service_repository: Arc<dyn SaasServiceRepository>,
        customer_repository: Arc<dyn CustomerRepository>,
        tld_repository: Arc<dyn TldRepository>,
        registration_repository: Arc<dyn RegistrationRepository>,
        registrar_provider: Arc<dyn RegistrarProvider>,
    ) -> Self {
        Self {
            saas_service_repository,
            customer_repository,
            tld_repository,
            registration_repository,
            registrar_provider,
        }
    }

    /// Checks the availability of each domain, in input order.
    ///
    /// One registrar session covers the whole batch. A failing price lookup
    /// or registrar call only affects its own entry; later domains are still
    /// checked. Duplicates are checked once per occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExternalService`] if no registrar session can be
    /// established.
    pub async fn check_domains(&self, domains: &[String]) -> Result<Vec<DomainCheck>, AppError> {
        let session = self.open_session().await?;

        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            results.push(self.check_one(&session, domain).await);
        }

        session.close().await;

        let available = results.iter().filter(|r| r.available).count();
        tracing::info!(total = results.len(), available, "Domain check finished");

        Ok(results)
    }

    async fn check_one(&self, session: &RegistrarSession, domain: &str) -> DomainCheck {
        let tld_name = tld_of(domain).to_ascii_lowercase();
        let tld = match self.tld_repository.find_by_name(&tld_name).await {
            Ok(tld) => tld,
            Err(e) => {
                tracing::warn!(domain, "TLD price lookup failed: {}", e);
                return DomainCheck::failed(domain, e.message());
            }
        };

        let availability = session.check_domain(domain).await;

        DomainCheck {
            domain: domain.to_string(),
            available: availability.available,
            price: tld.map(|t| t.sell_price).or(availability.price),
            error: availability.error,
        }
    }

    /// Registers `domain` for a customer and stores the attempt.
    ///
    /// The domain is split on its last dot, so `"my.company.de"` is stored
    /// as name `"my.company"` with TLD `"de"`. The TLD is matched
    /// case-insensitively and stored as listed in the catalogue. The record status is
    /// `registered` when the registrar reports success and `failed` otherwise.
    ///
    /// There is no transaction spanning the registrar call and the insert: if
    /// storing fails after a successful registrar call, the two diverge.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Validation`] if the domain has no name/TLD separator
    /// or its TLD is not offered.
    /// Returns [`AppError::ExternalService`] if no registrar session can be
    /// established.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register_domain(
        &self,
        customer_id: Uuid,
        domain: &str,
    ) -> Result<RegistrationResult, AppError> {
        let customer = self
            .customer_repository
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Customer not found", json!({ "customer_id": customer_id }))
            })?;

        let (requested_name, tld_name) = split_domain(domain).ok_or_else(|| {
            AppError::bad_request("Invalid domain format", json!({ "domain": domain }))
        })?;

        let tld = self
            .tld_repository
            .find_by_name(&tld_name.to_ascii_lowercase())
            .await?
            .filter(|t| t.is_active)
            .ok_or_else(|| {
                AppError::bad_request(
                    format!("TLD '{}' not supported", tld_name),
                    json!({ "tld": tld_name }),
                )
            })?;

        let registrant = RegistrantData {
            name: customer.name.clone(),
            email: customer.email.clone(),
            country_code: customer.country_code.clone(),
        };

        let session = self.open_session().await?;
        let outcome = session.register_domain(domain, &registrant).await;
        session.close().await;

        let status = if outcome.success {
            RegistrationStatus::Registered
        } else {
            RegistrationStatus::Failed
        };

        let new_registration = NewRegistration {
            customer_id,
            requested_name: requested_name.to_string(),
            tld: tld.name.clone(),
            domain: domain.to_string(),
            sell_price: tld.sell_price,
            status,
            registrar_request: Some(json!({ "domain": domain })),
            registrar_response: serde_json::to_value(&outcome).ok(),
        };

        let registration = self
            .registration_repository
            .create(new_registration)
            .await
            .inspect_err(|e| {
                if outcome.success {
                    tracing::error!(
                        domain,
                        customer_id = %customer_id,
                        "Registrar accepted the domain but the record was not stored: {}",
                        e
                    );
                }
            })?;

        tracing::info!(
            domain,
            customer_id = %customer_id,
            status = %registration.status,
            "Domain registration stored"
        );

        Ok(RegistrationResult {
            success: outcome.success,
            registration,
            error: outcome.error,
        })
    }

    /// Lists the registrations of a tenant's customer, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist for the
    /// tenant identified by `tenant_key`.
    /// Returns [`AppError::Internal`] if the tenant has no service row, or on
    /// database errors.
    pub async fn registrations_for_customer(
        &self,
        customer_id: Uuid,
        tenant_key: &str,
    ) -> Result<Vec<DomainRegistration>, AppError> {
        let saas_service = resolve_tenant(self.saas_service_repository.as_ref(), tenant_key).await?;
        tenant_customer(self.customer_repository.as_ref(), customer_id, &saas_service).await?;

        self.registration_repository
            .list_by_customer(customer_id)
            .await
    }

    /// Records an asynchronous status change reported by the registrar.
    ///
    /// Only registrations of the tenant's own customers can be changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the registration does not exist or
    /// belongs to another tenant's customer.
    /// Returns [`AppError::Internal`] if the tenant has no service row, or on
    /// database errors.
    pub async fn update_registration_status(
        &self,
        id: Uuid,
        tenant_key: &str,
        status: RegistrationStatus,
        registrar_response: Option<Value>,
    ) -> Result<DomainRegistration, AppError> {
        let not_found = || AppError::not_found("Registration not found", json!({ "id": id }));

        let saas_service = resolve_tenant(self.saas_service_repository.as_ref(), tenant_key).await?;
        let existing = self
            .registration_repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        let owner = self
            .customer_repository
            .find_by_id_and_service(existing.customer_id, saas_service.id)
            .await?;
        if owner.is_none() {
            tracing::warn!(registration_id = %id, tenant_key, "Registration belongs to another tenant");
            return Err(not_found());
        }

        let registration = self
            .registration_repository
            .update_status(id, status, registrar_response)
            .await?;

        tracing::info!(registration_id = %id, status = %status, "Registration status updated");

        Ok(registration)
    }

    async fn open_session(&self) -> Result<RegistrarSession, AppError> {
        RegistrarSession::open(self.registrar_provider.open())
            .await
            .map_err(|e| {
                AppError::external(
                    "Registrar session could not be established",
                    json!({ "reason": e.to_string() }),
                )
            })
    }
}
