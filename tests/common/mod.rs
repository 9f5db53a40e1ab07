#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use seitenkraft_api::application::services::{
    AuthService, DomainService, SuggestionService, WizardService,
};
use seitenkraft_api::domain::entities::{
    Customer, DomainRegistration, NewCustomer, NewRegistration, RegistrationStatus, SaasService,
    Tld,
};
use seitenkraft_api::domain::registrar::{
    AvailabilityResult, AvailabilityStatus, RegistrantData, Registrar, RegistrarError,
    RegistrarProvider, RegistrationOutcome,
};
use seitenkraft_api::domain::repositories::{
    CustomerRepository, RegistrationRepository, SaasServiceRepository, TldRepository,
};
use seitenkraft_api::error::AppError;
use seitenkraft_api::state::AppState;

pub const TEST_TOKEN: &str = "test-token";
pub const TENANT_KEY: &str = "handelshelfer";
pub const OTHER_TOKEN: &str = "other-token";
pub const OTHER_TENANT_KEY: &str = "handwerker24";

pub const TENANT_ID: Uuid = Uuid::from_u128(0x6f1c2a3e_0000_4000_8000_000000000001);
pub const OTHER_TENANT_ID: Uuid = Uuid::from_u128(0x6f1c2a3e_0000_4000_8000_000000000002);
pub const CUSTOMER_ID: Uuid = Uuid::from_u128(0x3d9b6c1a_0000_4000_8000_000000000001);
pub const OTHER_CUSTOMER_ID: Uuid = Uuid::from_u128(0x3d9b6c1a_0000_4000_8000_000000000003);

pub fn tld(name: &str, price: f64, priority: i32, sort_order: i32) -> Tld {
    Tld {
        name: name.to_string(),
        sell_price: price,
        is_active: true,
        sort_order,
        group_label: None,
        priority,
        priority_rule: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_tlds() -> Vec<Tld> {
    let mut inactive = tld("info", 4.90, 50, 9);
    inactive.is_active = false;

    vec![
        tld("de", 9.90, 100, 1),
        tld("com", 14.90, 95, 2),
        tld("net", 14.90, 85, 4),
        tld("org", 14.90, 80, 5),
        tld("shop", 29.90, 60, 8),
        inactive,
    ]
}

fn saas_service(id: Uuid, key: &str, name: &str) -> SaasService {
    SaasService {
        id,
        key: key.to_string(),
        name: name.to_string(),
        is_active: true,
        whitelabel_config: Some(json!({ "brandName": name })),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn customer(id: Uuid, saas_service_id: Uuid, name: &str, country: &str) -> Customer {
    Customer {
        id,
        saas_service_id,
        name: name.to_string(),
        email: "info@example.de".to_string(),
        country_code: country.to_string(),
        sector: Some("handwerker".to_string()),
        last_synced_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// ─── REPOSITORIES ────────────────────────────────────────────────────────────

pub struct InMemoryTldRepository {
    tlds: Vec<Tld>,
}

#[async_trait]
impl TldRepository for InMemoryTldRepository {
    async fn list_active(&self) -> Result<Vec<Tld>, AppError> {
        let mut active: Vec<Tld> = self.tlds.iter().filter(|t| t.is_active).cloned().collect();
        active.sort_by_key(|t| (std::cmp::Reverse(t.priority), t.sort_order));
        Ok(active)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tld>, AppError> {
        Ok(self.tlds.iter().find(|t| t.name == name).cloned())
    }

    async fn recommended_for_country(
        &self,
        _country: &str,
        limit: i64,
    ) -> Result<Vec<Tld>, AppError> {
        let active = self.list_active().await?;
        Ok(active.into_iter().take(limit as usize).collect())
    }
}

pub struct InMemorySaasServiceRepository {
    services: Vec<SaasService>,
}

#[async_trait]
impl SaasServiceRepository for InMemorySaasServiceRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<SaasService>, AppError> {
        Ok(self.services.iter().find(|s| s.key == key).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SaasService>, AppError> {
        Ok(self.services.iter().find(|s| s.id == id).cloned())
    }
}

pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_id_and_service(
        &self,
        id: Uuid,
        saas_service_id: Uuid,
    ) -> Result<Option<Customer>, AppError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers
            .iter()
            .find(|c| c.id == id && c.saas_service_id == saas_service_id)
            .cloned())
    }

    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let created = Customer {
            id: new_customer.id,
            saas_service_id: new_customer.saas_service_id,
            name: new_customer.name,
            email: new_customer.email,
            country_code: new_customer.country_code,
            sector: new_customer.sector,
            last_synced_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.customers.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    records: Mutex<Vec<DomainRegistration>>,
}

impl InMemoryRegistrationRepository {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<DomainRegistration> {
        self.records.lock().unwrap().clone()
    }

    pub fn insert(&self, registration: DomainRegistration) {
        self.records.lock().unwrap().push(registration);
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn create(
        &self,
        registration: NewRegistration,
    ) -> Result<DomainRegistration, AppError> {
        let created = DomainRegistration {
            id: Uuid::new_v4(),
            customer_id: registration.customer_id,
            requested_name: registration.requested_name,
            tld: registration.tld,
            domain: registration.domain,
            sell_price: registration.sell_price,
            status: registration.status,
            registrar_request: registration.registrar_request,
            registrar_response: registration.registrar_response,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.insert(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DomainRegistration>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<DomainRegistration>, AppError> {
        let records = self.records.lock().unwrap();
        let mut items: Vec<DomainRegistration> = records
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        registrar_response: Option<Value>,
    ) -> Result<DomainRegistration, AppError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Registration not found", json!({ "id": id })))?;

        record.status = status;
        if registrar_response.is_some() {
            record.registrar_response = registrar_response;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

// ─── REGISTRAR ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RegistrarCounters {
    pub opened: AtomicUsize,
    pub logins: AtomicUsize,
    pub logouts: AtomicUsize,
    pub checks: AtomicUsize,
    pub registrations: AtomicUsize,
}

impl RegistrarCounters {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Registrar double: domains starting with `taken` are registered,
/// everything else is free at 10.0.
pub struct FakeRegistrar {
    fail_login: bool,
    refuse_registration: bool,
    counters: Arc<RegistrarCounters>,
}

#[async_trait]
impl Registrar for FakeRegistrar {
    async fn login(&self) -> Result<(), RegistrarError> {
        self.counters.logins.fetch_add(1, Ordering::SeqCst);
        if self.fail_login {
            return Err(RegistrarError::Remote {
                code: 2200,
                message: "Authentication error".to_string(),
            });
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), RegistrarError> {
        self.counters.logouts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn check_domain(&self, domain: &str) -> AvailabilityResult {
        self.counters.checks.fetch_add(1, Ordering::SeqCst);
        let available = !domain.starts_with("taken");
        AvailabilityResult {
            domain: domain.to_string(),
            available,
            status: if available {
                AvailabilityStatus::Available
            } else {
                AvailabilityStatus::Registered
            },
            price: available.then_some(10.0),
            error: None,
        }
    }

    async fn register_domain(
        &self,
        domain: &str,
        _registrant: &RegistrantData,
    ) -> RegistrationOutcome {
        self.counters.registrations.fetch_add(1, Ordering::SeqCst);
        if self.refuse_registration {
            return RegistrationOutcome {
                success: false,
                domain: domain.to_string(),
                status: "failed".to_string(),
                message: "Object exists".to_string(),
                registration_id: None,
                error: Some("Object exists".to_string()),
            };
        }
        RegistrationOutcome {
            success: true,
            domain: domain.to_string(),
            status: "pending".to_string(),
            message: "Registration accepted".to_string(),
            registration_id: Some(format!("test-reg-{}", domain)),
            error: None,
        }
    }
}

#[derive(Default)]
pub struct FakeRegistrarProvider {
    pub fail_login: bool,
    pub refuse_registration: bool,
    pub counters: Arc<RegistrarCounters>,
}

impl RegistrarProvider for FakeRegistrarProvider {
    fn open(&self) -> Arc<dyn Registrar> {
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Arc::new(FakeRegistrar {
            fail_login: self.fail_login,
            refuse_registration: self.refuse_registration,
            counters: self.counters.clone(),
        })
    }
}

// ─── APPLICATION ─────────────────────────────────────────────────────────────

pub struct TestApp {
    pub state: AppState,
    pub registrations: Arc<InMemoryRegistrationRepository>,
    pub counters: Arc<RegistrarCounters>,
}

impl TestApp {
    /// Server over the full router, authentication and CORS included.
    pub fn server(&self) -> TestServer {
        let app = seitenkraft_api::routes::router(
            self.state.clone(),
            &["http://localhost:5173".to_string()],
        );
        TestServer::new(app).unwrap()
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(FakeRegistrarProvider::default())
}

pub fn create_test_app_with(provider: FakeRegistrarProvider) -> TestApp {
    let tld_repo = Arc::new(InMemoryTldRepository {
        tlds: sample_tlds(),
    });
    let saas_repo = Arc::new(InMemorySaasServiceRepository {
        services: vec![
            saas_service(TENANT_ID, TENANT_KEY, "Handelshelfer"),
            saas_service(OTHER_TENANT_ID, OTHER_TENANT_KEY, "Handwerker24"),
        ],
    });
    let customer_repo = Arc::new(InMemoryCustomerRepository {
        customers: Mutex::new(vec![
            customer(CUSTOMER_ID, TENANT_ID, "Schreinerei Müller GmbH", "DE"),
            customer(OTHER_CUSTOMER_ID, OTHER_TENANT_ID, "Elektro Huber", "AT"),
        ]),
    });
    let registration_repo = Arc::new(InMemoryRegistrationRepository::default());
    let counters = provider.counters.clone();

    let suggestion_service = Arc::new(SuggestionService::new(tld_repo.clone()));
    let domain_service = Arc::new(DomainService::new(
        saas_repo.clone(),
        customer_repo.clone(),
        tld_repo,
        registration_repo.clone(),
        Arc::new(provider),
    ));
    let wizard_service = Arc::new(WizardService::new(saas_repo, customer_repo));
    let auth_service = Arc::new(AuthService::new(
        TEST_TOKEN,
        TENANT_KEY,
        &[(OTHER_TOKEN.to_string(), OTHER_TENANT_KEY.to_string())],
    ));

    let state = AppState {
        suggestion_service,
        domain_service,
        wizard_service,
        auth_service,
        environment: "development",
    };

    TestApp {
        state,
        registrations: registration_repo,
        counters,
    }
}

pub fn stored_registration(customer_id: Uuid, domain: &str) -> DomainRegistration {
    let (name, tld) = domain.rsplit_once('.').unwrap();
    DomainRegistration {
        id: Uuid::new_v4(),
        customer_id,
        requested_name: name.to_string(),
        tld: tld.to_string(),
        domain: domain.to_string(),
        sell_price: 9.90,
        status: RegistrationStatus::Pending,
        registrar_request: Some(json!({ "domain": domain })),
        registrar_response: Some(json!({ "status": "pending" })),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// ─── DATABASE ────────────────────────────────────────────────────────────────

pub async fn insert_tenant(pool: &sqlx::PgPool, id: Uuid, key: &str) {
    sqlx::query("INSERT INTO saas_services (id, service_key, name) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(key)
        .bind(key)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_tld(pool: &sqlx::PgPool, name: &str, price: f64, priority: i32, active: bool) {
    sqlx::query(
        "INSERT INTO tlds (name, sell_price, is_active, priority) VALUES ($1, $2::numeric, $3, $4)",
    )
    .bind(name)
    .bind(price)
    .bind(active)
    .bind(priority)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_customer(pool: &sqlx::PgPool, id: Uuid, tenant_id: Uuid, name: &str) {
    sqlx::query(
        "INSERT INTO customers (id, saas_service_id, name, email) VALUES ($1, $2, $3, 'info@example.de')",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}
