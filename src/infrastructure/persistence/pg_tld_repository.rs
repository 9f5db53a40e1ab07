//! PostgreSQL implementation of the TLD repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Tld;
use crate::domain::repositories::TldRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TldRecord {
    name: String,
    sell_price: f64,
    is_active: bool,
    sort_order: i32,
    group_label: Option<String>,
    priority: i32,
    priority_rule: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TldRecord> for Tld {
    fn from(r: TldRecord) -> Self {
        Self {
            name: r.name,
            sell_price: r.sell_price,
            is_active: r.is_active,
            sort_order: r.sort_order,
            group_label: r.group_label,
            priority: r.priority,
            priority_rule: r.priority_rule,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

// Prices are NUMERIC in the database and read as float8.
const SELECT_COLUMNS: &str = r#"
    SELECT name, sell_price::float8 AS sell_price, is_active, sort_order, group_label,
           priority, priority_rule, created_at, updated_at
    FROM tlds
"#;

/// PostgreSQL repository for TLD offerings.
pub struct PgTldRepository {
    pool: Arc<PgPool>,
}

impl PgTldRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TldRepository for PgTldRepository {
    async fn list_active(&self) -> Result<Vec<Tld>, AppError> {
        let rows = sqlx::query_as::<_, TldRecord>(&format!(
            "{SELECT_COLUMNS} WHERE is_active = TRUE ORDER BY priority DESC, sort_order ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tld>, AppError> {
        let row = sqlx::query_as::<_, TldRecord>(&format!("{SELECT_COLUMNS} WHERE name = $1"))
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn recommended_for_country(
        &self,
        country: &str,
        limit: i64,
    ) -> Result<Vec<Tld>, AppError> {
        tracing::debug!(country, limit, "Loading recommended TLDs");

        let rows = sqlx::query_as::<_, TldRecord>(&format!(
            "{SELECT_COLUMNS} WHERE is_active = TRUE ORDER BY priority DESC, sort_order ASC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
