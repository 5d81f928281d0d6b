//! Stored property entity

use serde::{Deserialize, Serialize};

/// Key holding the permanent identifier of this installation
pub const PERMANENT_SERVER_ID: &str = "sonar.core.id";

/// A global setting value as persisted in the property store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    key: String,
    value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_server_id(&self) -> bool {
        self.key == PERMANENT_SERVER_ID
    }
}
