//! License service - lists license settings with their validation state

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::domain::license::{build_license_entries, server_id};
use crate::domain::{DomainError, LicenseEntry, PropertyDefinitions, PropertyStore, PERMANENT_SERVER_ID};

pub struct LicenseService {
    definitions: Arc<PropertyDefinitions>,
    store: Arc<dyn PropertyStore>,
}

impl LicenseService {
    pub fn new(definitions: Arc<PropertyDefinitions>, store: Arc<dyn PropertyStore>) -> Self {
        Self { definitions, store }
    }

    /// Lists every license setting, validated against today's date
    pub async fn list(&self) -> Result<Vec<LicenseEntry>, DomainError> {
        self.list_at(Local::now().date_naive()).await
    }

    /// Lists every license setting, validated against `today`
    pub async fn list_at(&self, today: NaiveDate) -> Result<Vec<LicenseEntry>, DomainError> {
        let license_keys = self.definitions.license_keys();

        let mut lookup_keys = license_keys.clone();
        lookup_keys.insert(PERMANENT_SERVER_ID.to_string());

        let properties = self.store.select_global_properties_by_keys(&lookup_keys).await?;
        let installation_id = server_id(&properties);

        let entries = build_license_entries(&license_keys, &properties, installation_id, today);

        debug!(
            licenses = entries.len(),
            stored = properties.iter().filter(|p| !p.is_server_id()).count(),
            server_id_known = installation_id.is_some(),
            "Built license listing"
        );

        Ok(entries)
    }
}
