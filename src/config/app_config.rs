use serde::Deserialize;

use crate::domain::{GlobalPermission, PropertyDefinition, PropertyType};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub licensing: LicensingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Property store backend selection
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// License settings declared by this installation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LicensingConfig {
    /// Permanent server id stored at startup when none is stored yet
    pub server_id: Option<String>,
    pub definitions: Vec<DefinitionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionConfig {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default = "default_definition_type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_definition_type() -> PropertyType {
    PropertyType::License
}

impl From<&DefinitionConfig> for PropertyDefinition {
    fn from(config: &DefinitionConfig) -> Self {
        let name = config.name.clone().unwrap_or_else(|| config.key.clone());
        let mut definition = PropertyDefinition::new(config.key.clone(), name, config.property_type);

        if let Some(description) = &config.description {
            definition = definition.with_description(description.clone());
        }
        if let Some(category) = &config.category {
            definition = definition.with_category(category.clone());
        }

        definition
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub tokens: Vec<TokenConfig>,
}

/// A user token, stored as the hex SHA-256 of the secret
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub login: String,
    pub token_sha256: String,
    #[serde(default)]
    pub permissions: Vec<GlobalPermission>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::default(),
            url: None,
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Property definitions declared in the `licensing` section
    pub fn property_definitions(&self) -> Vec<PropertyDefinition> {
        self.licensing
            .definitions
            .iter()
            .map(PropertyDefinition::from)
            .collect()
    }
}
