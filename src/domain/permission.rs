//! Global permissions granted to authenticated users

use serde::{Deserialize, Serialize};

/// Instance-wide permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalPermission {
    /// Administer the system, required for license and settings management
    #[serde(rename = "admin")]
    SystemAdmin,
    #[serde(rename = "profileadmin")]
    QualityProfileAdmin,
    #[serde(rename = "gateadmin")]
    QualityGateAdmin,
    Scan,
    Provisioning,
}

impl GlobalPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalPermission::SystemAdmin => "admin",
            GlobalPermission::QualityProfileAdmin => "profileadmin",
            GlobalPermission::QualityGateAdmin => "gateadmin",
            GlobalPermission::Scan => "scan",
            GlobalPermission::Provisioning => "provisioning",
        }
    }
}

impl std::fmt::Display for GlobalPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
