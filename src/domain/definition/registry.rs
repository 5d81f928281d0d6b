//! Registry of all declared property definitions

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::error::DomainError;

use super::{PropertyDefinition, PropertyType};

/// Immutable set of definitions, keyed by setting key
#[derive(Debug, Clone, Default)]
pub struct PropertyDefinitions {
    by_key: BTreeMap<String, PropertyDefinition>,
}

impl PropertyDefinitions {
    /// Builds the registry, rejecting blank or duplicate keys
    pub fn new(definitions: Vec<PropertyDefinition>) -> Result<Self, DomainError> {
        let mut by_key = BTreeMap::new();

        for definition in definitions {
            let key = definition.key().trim().to_string();

            if key.is_empty() {
                return Err(DomainError::configuration(
                    "Property definition key must not be empty",
                ));
            }

            if by_key.contains_key(&key) {
                return Err(DomainError::configuration(format!(
                    "Property definition '{}' is declared more than once",
                    key
                )));
            }

            by_key.insert(key, definition);
        }

        Ok(Self { by_key })
    }

    /// All definitions, ordered by key
    pub fn all(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.by_key.values()
    }

    pub fn get(&self, key: &str) -> Option<&PropertyDefinition> {
        self.by_key.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn keys_of_type(&self, property_type: PropertyType) -> BTreeSet<String> {
        self.by_key
            .iter()
            .filter(|(_, definition)| definition.property_type() == property_type)
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn license_keys(&self) -> BTreeSet<String> {
        self.keys_of_type(PropertyType::License)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PropertyDefinitions {
        PropertyDefinitions::new(vec![
            PropertyDefinition::license("sonar.cpp.license.secured"),
            PropertyDefinition::new("sonar.core.serverBaseURL", "Server base URL", PropertyType::String),
            PropertyDefinition::license("sonar.abap.license.secured"),
        ])
        .unwrap()
    }

    #[test]
    fn test_license_keys_filters_by_type() {
        let keys: Vec<_> = registry().license_keys().into_iter().collect();

        assert_eq!(
            keys,
            vec!["sonar.abap.license.secured", "sonar.cpp.license.secured"]
        );
    }

    #[test]
    fn test_get_and_contains() {
        let definitions = registry();

        assert!(definitions.contains("sonar.core.serverBaseURL"));
        assert_eq!(
            definitions.get("sonar.core.serverBaseURL").map(|d| d.property_type()),
            Some(PropertyType::String)
        );
        assert!(definitions.get("unknown").is_none());
        assert_eq!(definitions.len(), 3);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = PropertyDefinitions::new(vec![
            PropertyDefinition::license("sonar.a.license"),
            PropertyDefinition::license("sonar.a.license"),
        ]);

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_blank_key_rejected() {
        let result = PropertyDefinitions::new(vec![PropertyDefinition::license("  ")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_registry() {
        let definitions = PropertyDefinitions::default();

        assert!(definitions.is_empty());
        assert!(definitions.license_keys().is_empty());
    }
}
