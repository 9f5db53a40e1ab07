//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CustomerRecord {
    id: Uuid,
    saas_service_id: Uuid,
    name: String,
    email: String,
    country_code: String,
    sector: Option<String>,
    last_synced_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRecord> for Customer {
    fn from(r: CustomerRecord) -> Self {
        Self {
            id: r.id,
            saas_service_id: r.saas_service_id,
            name: r.name,
            email: r.email,
            country_code: r.country_code,
            sector: r.sector,
            last_synced_at: r.last_synced_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for customers.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRecord>(
            r#"
            SELECT id, saas_service_id, name, email, country_code, sector,
                   last_synced_at, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id_and_service(
        &self,
        id: Uuid,
        saas_service_id: Uuid,
    ) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRecord>(
            r#"
            SELECT id, saas_service_id, name, email, country_code, sector,
                   last_synced_at, created_at, updated_at
            FROM customers
            WHERE id = $1 AND saas_service_id = $2
            "#,
        )
        .bind(id)
        .bind(saas_service_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRecord>(
            r#"
            INSERT INTO customers (id, saas_service_id, name, email, country_code, sector)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, saas_service_id, name, email, country_code, sector,
                      last_synced_at, created_at, updated_at
            "#,
        )
        .bind(new_customer.id)
        .bind(new_customer.saas_service_id)
        .bind(new_customer.name)
        .bind(new_customer.email)
        .bind(new_customer.country_code)
        .bind(new_customer.sector)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
