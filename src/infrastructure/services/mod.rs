//! Application services

mod license_service;
mod settings_service;

pub use license_service::LicenseService;
pub use settings_service::SettingsService;
