//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, DefinitionConfig, LicensingConfig, LogFormat, LoggingConfig,
    ServerConfig, StorageConfig, StorageType, TokenConfig,
};
