//! PostgreSQL implementation of the registration repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{DomainRegistration, NewRegistration, RegistrationStatus};
use crate::domain::repositories::RegistrationRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RegistrationRecord {
    id: Uuid,
    customer_id: Uuid,
    requested_name: String,
    tld: String,
    domain: String,
    sell_price: f64,
    status: String,
    registrar_request: Option<Value>,
    registrar_response: Option<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRecord> for DomainRegistration {
    type Error = AppError;

    fn try_from(r: RegistrationRecord) -> Result<Self, Self::Error> {
        let status: RegistrationStatus = r.status.parse().map_err(|e: String| {
            AppError::internal("Corrupt registration status", json!({"id": r.id, "reason": e}))
        })?;

        Ok(Self {
            id: r.id,
            customer_id: r.customer_id,
            requested_name: r.requested_name,
            tld: r.tld,
            domain: r.domain,
            sell_price: r.sell_price,
            status,
            registrar_request: r.registrar_request,
            registrar_response: r.registrar_response,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

const RETURNING_COLUMNS: &str = r#"
    id, customer_id, requested_name, tld, domain, sell_price::float8 AS sell_price,
    status, registrar_request, registrar_response, created_at, updated_at
"#;

/// PostgreSQL repository for registration records.
pub struct PgRegistrationRepository {
    pool: Arc<PgPool>,
}

impl PgRegistrationRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PgRegistrationRepository {
    async fn create(
        &self,
        registration: NewRegistration,
    ) -> Result<DomainRegistration, AppError> {
        let row = sqlx::query_as::<_, RegistrationRecord>(&format!(
            r#"
            INSERT INTO domain_registrations
                (customer_id, requested_name, tld, domain, sell_price, status,
                 registrar_request, registrar_response)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {RETURNING_COLUMNS}
            "#
        ))
        .bind(registration.customer_id)
        .bind(registration.requested_name)
        .bind(registration.tld)
        .bind(registration.domain)
        .bind(registration.sell_price)
        .bind(registration.status.as_str())
        .bind(registration.registrar_request)
        .bind(registration.registrar_response)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DomainRegistration>, AppError> {
        let row = sqlx::query_as::<_, RegistrationRecord>(&format!(
            "SELECT {RETURNING_COLUMNS} FROM domain_registrations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<DomainRegistration>, AppError> {
        let rows = sqlx::query_as::<_, RegistrationRecord>(&format!(
            r#"
            SELECT {RETURNING_COLUMNS}
            FROM domain_registrations
            WHERE customer_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(customer_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        registrar_response: Option<Value>,
    ) -> Result<DomainRegistration, AppError> {
        // A missing response keeps the stored payload.
        let row = sqlx::query_as::<_, RegistrationRecord>(&format!(
            r#"
            UPDATE domain_registrations SET
                status             = $2,
                registrar_response = COALESCE($3, registrar_response),
                updated_at         = NOW()
            WHERE id = $1
            RETURNING {RETURNING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(registrar_response)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Registration not found", json!({"id": id})))?
            .try_into()
    }
}
