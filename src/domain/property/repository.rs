//! Property store trait

use std::collections::BTreeSet;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::error::DomainError;

use super::Property;

/// Persistence for global properties
///
/// Every call runs in its own short-lived scope against the backend; nothing is
/// held open between calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Fetches the stored properties among `keys` within one read-only scope.
    /// Keys without a stored value are simply absent from the result.
    async fn select_global_properties_by_keys(
        &self,
        keys: &BTreeSet<String>,
    ) -> Result<Vec<Property>, DomainError>;

    /// Fetches a single property
    async fn get(&self, key: &str) -> Result<Option<Property>, DomainError>;

    /// Inserts or replaces a property
    async fn save(&self, property: Property) -> Result<(), DomainError>;

    /// Deletes the given keys, returns how many were removed
    async fn delete(&self, keys: &BTreeSet<String>) -> Result<u64, DomainError>;

    /// Checks that the backend is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
