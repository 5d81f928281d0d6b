//! PostgreSQL property store with connection pooling

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::domain::property::{Property, PropertyStore};
use crate::domain::DomainError;

const DEFAULT_TABLE: &str = "properties";

/// PostgreSQL connection settings
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/license_admin".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }
}

/// Global properties kept in a `(prop_key, text_value, updated_at)` table
pub struct PostgresPropertyStore {
    pool: PgPool,
    table_name: String,
}

impl Debug for PostgresPropertyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresPropertyStore")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl PostgresPropertyStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_name: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Opens a pooled connection to the database
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ensures the properties table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(&self.create_table_sql())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }

    fn create_table_sql(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                prop_key VARCHAR(512) PRIMARY KEY,
                text_value TEXT NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table_name
        )
    }

    fn select_by_keys_sql(&self) -> String {
        format!(
            "SELECT prop_key, text_value FROM {} WHERE prop_key = ANY($1) ORDER BY prop_key",
            self.table_name
        )
    }

    fn select_one_sql(&self) -> String {
        format!(
            "SELECT prop_key, text_value FROM {} WHERE prop_key = $1",
            self.table_name
        )
    }

    fn upsert_sql(&self) -> String {
        format!(
            r#"
            INSERT INTO {} (prop_key, text_value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (prop_key)
            DO UPDATE SET text_value = EXCLUDED.text_value, updated_at = NOW()
            "#,
            self.table_name
        )
    }

    fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE prop_key = ANY($1)", self.table_name)
    }
}

fn row_to_property(row: &sqlx::postgres::PgRow) -> Result<Property, DomainError> {
    let key: String = row
        .try_get("prop_key")
        .map_err(|e| DomainError::storage(format!("Failed to read prop_key: {}", e)))?;
    let value: String = row
        .try_get("text_value")
        .map_err(|e| DomainError::storage(format!("Failed to read text_value: {}", e)))?;

    Ok(Property::new(key, value))
}

#[async_trait]
impl PropertyStore for PostgresPropertyStore {
    async fn select_global_properties_by_keys(
        &self,
        keys: &BTreeSet<String>,
    ) -> Result<Vec<Property>, DomainError> {
        let keys: Vec<String> = keys.iter().cloned().collect();

        // Dropping the transaction on an early return rolls it back
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open session: {}", e)))?;

        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open read-only session: {}", e)))?;

        let rows = sqlx::query(&self.select_by_keys_sql())
            .bind(&keys)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to select properties: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to close session: {}", e)))?;

        rows.iter().map(row_to_property).collect()
    }

    async fn get(&self, key: &str) -> Result<Option<Property>, DomainError> {
        let row = sqlx::query(&self.select_one_sql())
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get property: {}", e)))?;

        row.as_ref().map(row_to_property).transpose()
    }

    async fn save(&self, property: Property) -> Result<(), DomainError> {
        sqlx::query(&self.upsert_sql())
            .bind(property.key())
            .bind(property.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save property: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, keys: &BTreeSet<String>) -> Result<u64, DomainError> {
        let keys: Vec<String> = keys.iter().cloned().collect();

        let result = sqlx::query(&self.delete_sql())
            .bind(&keys)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete properties: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database unreachable: {}", e)))?;

        Ok(())
    }
}
