//! Domain layer - Core business logic and entities

pub mod definition;
pub mod error;
pub mod license;
pub mod permission;
pub mod property;

pub use definition::{PropertyDefinition, PropertyDefinitions, PropertyType};
pub use error::DomainError;
pub use license::{build_license_entries, License, LicenseEntry, ALL_SERVERS_VALUE};
pub use permission::GlobalPermission;
pub use property::{Property, PropertyStore, PERMANENT_SERVER_ID};
