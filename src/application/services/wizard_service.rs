//! Wizard entry point: resolves the tenant and its customer.

use std::sync::Arc;

use super::tenant::{resolve_tenant, tenant_customer};
use crate::domain::entities::{Customer, SaasService};
use crate::domain::repositories::{CustomerRepository, SaasServiceRepository};
use crate::error::AppError;
use uuid::Uuid;

/// Data needed to start the wizard for one customer.
#[derive(Debug, Clone)]
pub struct WizardStart {
    pub customer: Customer,
    pub saas_service: SaasService,
}

pub struct WizardService {
    saas_service_repository: Arc<dyn SaasServiceRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
}

impl WizardService {
    pub fn new(
        saas_service_repository: Arc<dyn SaasServiceRepository>,
        customer_repository: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            saas_service_repository,
            customer_repository,
        }
    }

    /// Loads the customer within the tenant identified by `tenant_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the tenant key resolved from the
    /// client token has no tenant service. The service is misconfigured then.
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist for
    /// this tenant.
    pub async fn start(&self, customer_id: Uuid, tenant_key: &str) -> Result<WizardStart, AppError> {
        let saas_service = resolve_tenant(self.saas_service_repository.as_ref(), tenant_key).await?;
        let customer =
            tenant_customer(self.customer_repository.as_ref(), customer_id, &saas_service).await?;

        Ok(WizardStart {
            customer,
            saas_service,
        })
    }
}
