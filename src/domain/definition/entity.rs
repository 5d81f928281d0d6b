//! Property definition entities

use serde::{Deserialize, Serialize};

/// Value type of a declared setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Text,
    Password,
    Boolean,
    Integer,
    Float,
    SingleSelectList,
    License,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "STRING",
            PropertyType::Text => "TEXT",
            PropertyType::Password => "PASSWORD",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Integer => "INTEGER",
            PropertyType::Float => "FLOAT",
            PropertyType::SingleSelectList => "SINGLE_SELECT_LIST",
            PropertyType::License => "LICENSE",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A setting declared ahead of time, which administrators may then set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    key: String,
    name: String,
    #[serde(rename = "type")]
    property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl PropertyDefinition {
    pub fn new(key: impl Into<String>, name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            property_type,
            description: None,
            category: None,
        }
    }

    /// Shorthand for a LICENSE definition named after its key
    pub fn license(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(key.clone(), key, PropertyType::License)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PropertyType::License).unwrap(),
            "\"LICENSE\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyType::SingleSelectList).unwrap(),
            "\"SINGLE_SELECT_LIST\""
        );
    }

    #[test]
    fn test_property_type_deserialization() {
        let parsed: PropertyType = serde_json::from_str("\"PASSWORD\"").unwrap();
        assert_eq!(parsed, PropertyType::Password);
    }

    #[test]
    fn test_license_shorthand() {
        let definition = PropertyDefinition::license("sonar.cpp.license.secured")
            .with_category("licenses");

        assert_eq!(definition.key(), "sonar.cpp.license.secured");
        assert_eq!(definition.name(), "sonar.cpp.license.secured");
        assert_eq!(definition.property_type(), PropertyType::License);
        assert_eq!(definition.category(), Some("licenses"));
        assert!(definition.description().is_none());
    }
}
