//! Application state shared by all handlers

use std::sync::Arc;

use crate::domain::{PropertyDefinitions, PropertyStore};
use crate::infrastructure::auth::TokenAuthenticator;
use crate::infrastructure::services::{LicenseService, SettingsService};

#[derive(Clone)]
pub struct AppState {
    pub license_service: Arc<LicenseService>,
    pub settings_service: Arc<SettingsService>,
    pub property_store: Arc<dyn PropertyStore>,
    pub authenticator: Arc<TokenAuthenticator>,
}

impl AppState {
    pub fn new(
        definitions: PropertyDefinitions,
        property_store: Arc<dyn PropertyStore>,
        authenticator: TokenAuthenticator,
    ) -> Self {
        let definitions = Arc::new(definitions);

        Self {
            license_service: Arc::new(LicenseService::new(
                definitions.clone(),
                property_store.clone(),
            )),
            settings_service: Arc::new(SettingsService::new(definitions, property_store.clone())),
            property_store,
            authenticator: Arc::new(authenticator),
        }
    }
}
