//! Settings service - writes and resets declared global settings

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, Property, PropertyDefinitions, PropertyStore, PERMANENT_SERVER_ID};

pub struct SettingsService {
    definitions: Arc<PropertyDefinitions>,
    store: Arc<dyn PropertyStore>,
}

impl SettingsService {
    pub fn new(definitions: Arc<PropertyDefinitions>, store: Arc<dyn PropertyStore>) -> Self {
        Self { definitions, store }
    }

    /// Stores a value for a declared setting
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.check_defined(key)?;

        if value.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "A non-empty value must be provided for setting '{}'",
                key
            )));
        }

        self.store.save(Property::new(key, value)).await?;
        info!(key = %key, "Setting updated");

        Ok(())
    }

    /// Removes the stored values of declared settings
    pub async fn reset(&self, keys: &BTreeSet<String>) -> Result<u64, DomainError> {
        if keys.is_empty() {
            return Err(DomainError::validation("At least one setting key is required"));
        }

        for key in keys {
            self.check_defined(key)?;
        }

        let removed = self.store.delete(keys).await?;
        info!(keys = keys.len(), removed, "Settings reset");

        Ok(removed)
    }

    /// Stores the installation identity unless one is already stored.
    /// Returns the identity in effect afterwards.
    pub async fn bootstrap_server_id(&self, configured: Option<&str>) -> Result<Option<String>, DomainError> {
        if let Some(existing) = self.store.get(PERMANENT_SERVER_ID).await? {
            return Ok(Some(existing.value().to_string()));
        }

        match configured.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => {
                self.store.save(Property::new(PERMANENT_SERVER_ID, id)).await?;
                info!(server_id = %id, "Server id initialized");
                Ok(Some(id.to_string()))
            }
            None => Ok(None),
        }
    }

    fn check_defined(&self, key: &str) -> Result<(), DomainError> {
        if self.definitions.contains(key) {
            Ok(())
        } else {
            Err(DomainError::not_found(format!("Setting '{}' is not defined", key)))
        }
    }
}
