//! License administration API
//!
//! Serves the license settings of an installation:
//! - Lists every declared license setting with product, server id and
//!   expiration checks
//! - Updates and resets setting values in the property store
//! - In-memory or PostgreSQL property storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use domain::PropertyDefinitions;
use infrastructure::{
    auth::TokenAuthenticator, property::create_property_store, services::SettingsService,
};
use tracing::{info, warn};

/// Create the application state from configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let definitions = PropertyDefinitions::new(config.property_definitions())?;
    info!(
        definitions = definitions.len(),
        licenses = definitions.license_keys().len(),
        "Property definitions loaded"
    );

    let authenticator = TokenAuthenticator::new(&config.auth.tokens)?;
    if authenticator.is_empty() {
        warn!("No auth tokens configured; administration actions are unreachable");
    }

    let store = create_property_store(&config.storage).await?;
    let state = AppState::new(definitions, store, authenticator);

    match state
        .settings_service
        .bootstrap_server_id(config.licensing.server_id.as_deref())
        .await?
    {
        Some(server_id) => info!(server_id = %server_id, "Server id in effect"),
        None => warn!("No server id stored; server id checks are skipped"),
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefinitionConfig;
    use crate::domain::{PropertyStore, PropertyType};

    #[tokio::test]
    async fn test_create_app_state_bootstraps_server_id() {
        let mut config = AppConfig::default();
        config.licensing.server_id = Some("srv-1".to_string());
        config.licensing.definitions = vec![DefinitionConfig {
            key: "sonar.cpp.license.secured".to_string(),
            name: None,
            property_type: PropertyType::License,
            description: None,
            category: None,
        }];

        let state = create_app_state_with_config(&config).await.unwrap();

        let stored = state.property_store.get(domain::PERMANENT_SERVER_ID).await.unwrap();
        assert_eq!(stored.map(|p| p.value().to_string()), Some("srv-1".to_string()));

        let entries = state.license_service.list().await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_definitions_fail_startup() {
        let definition = DefinitionConfig {
            key: "sonar.a.license".to_string(),
            name: None,
            property_type: PropertyType::License,
            description: None,
            category: None,
        };
        let mut config = AppConfig::default();
        config.licensing.definitions = vec![definition.clone(), definition];

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
