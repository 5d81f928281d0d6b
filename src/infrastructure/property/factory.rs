//! Property store selection from configuration

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageConfig, StorageType};
use crate::domain::property::PropertyStore;
use crate::domain::DomainError;

use super::{InMemoryPropertyStore, PostgresConfig, PostgresPropertyStore};

/// Builds the configured property store, creating the table for PostgreSQL
pub async fn create_property_store(
    config: &StorageConfig,
) -> Result<Arc<dyn PropertyStore>, DomainError> {
    match config.storage_type {
        StorageType::Memory => {
            info!("Using in-memory property store");
            Ok(Arc::new(InMemoryPropertyStore::new()))
        }
        StorageType::Postgres => {
            let url = config.url.as_deref().ok_or_else(|| {
                DomainError::configuration("storage.url is required for postgres storage")
            })?;

            let postgres_config = PostgresConfig::new(url)
                .with_max_connections(config.max_connections)
                .with_min_connections(config.min_connections)
                .with_connect_timeout(config.connect_timeout_secs)
                .with_idle_timeout(config.idle_timeout_secs);

            let store = PostgresPropertyStore::connect(&postgres_config).await?;
            store.ensure_table().await?;

            info!("Using PostgreSQL property store");
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = create_property_store(&StorageConfig::default()).await.unwrap();
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_postgres_requires_url() {
        let config = StorageConfig {
            storage_type: StorageType::Postgres,
            url: None,
            ..Default::default()
        };

        let result = create_property_store(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
