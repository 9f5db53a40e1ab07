//! PostgreSQL implementation of the tenant service repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::SaasService;
use crate::domain::repositories::SaasServiceRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SaasServiceRecord {
    id: Uuid,
    service_key: String,
    name: String,
    is_active: bool,
    whitelabel_config: Option<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SaasServiceRecord> for SaasService {
    fn from(r: SaasServiceRecord) -> Self {
        Self {
            id: r.id,
            key: r.service_key,
            name: r.name,
            is_active: r.is_active,
            whitelabel_config: r.whitelabel_config,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, service_key, name, is_active, whitelabel_config, created_at, updated_at
    FROM saas_services
"#;

/// PostgreSQL repository for tenant services.
pub struct PgSaasServiceRepository {
    pool: Arc<PgPool>,
}

impl PgSaasServiceRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaasServiceRepository for PgSaasServiceRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<SaasService>, AppError> {
        let row = sqlx::query_as::<_, SaasServiceRecord>(&format!(
            "{SELECT_COLUMNS} WHERE service_key = $1"
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SaasService>, AppError> {
        let row = sqlx::query_as::<_, SaasServiceRecord>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }
}
