//! In-memory property store

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::property::{Property, PropertyStore};
use crate::domain::DomainError;

/// Thread-safe in-memory property store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryPropertyStore {
    properties: RwLock<HashMap<String, String>>,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with properties
    pub fn with_properties(properties: Vec<Property>) -> Self {
        let map = properties
            .into_iter()
            .map(|p| (p.key().to_string(), p.value().to_string()))
            .collect();

        Self {
            properties: RwLock::new(map),
        }
    }
}

#[async_trait]
impl PropertyStore for InMemoryPropertyStore {
    async fn select_global_properties_by_keys(
        &self,
        keys: &BTreeSet<String>,
    ) -> Result<Vec<Property>, DomainError> {
        let properties = self.properties.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(keys
            .iter()
            .filter_map(|key| properties.get(key).map(|value| Property::new(key, value)))
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(properties.get(key).map(|value| Property::new(key, value)))
    }

    async fn save(&self, property: Property) -> Result<(), DomainError> {
        let mut properties = self.properties.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        properties.insert(property.key().to_string(), property.value().to_string());
        Ok(())
    }

    async fn delete(&self, keys: &BTreeSet<String>) -> Result<u64, DomainError> {
        let mut properties = self.properties.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(keys.iter().filter(|key| properties.remove(*key).is_some()).count() as u64)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
