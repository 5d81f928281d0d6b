//! Request and response bodies of the license and settings actions

use serde::{Deserialize, Serialize};

use crate::domain::LicenseEntry;

/// Response of `licenses/list`
#[derive(Debug, Clone, Serialize)]
pub struct ListLicensesResponse {
    pub licenses: Vec<LicenseEntry>,
}

/// Body of `settings/set`
#[derive(Debug, Clone, Deserialize)]
pub struct SetSettingRequest {
    pub key: String,
    pub value: String,
}

/// Body of `settings/reset`
#[derive(Debug, Clone, Deserialize)]
pub struct ResetSettingsRequest {
    pub keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_serialization() {
        let response = ListLicensesResponse {
            licenses: vec![LicenseEntry {
                key: "sonar.a.license".to_string(),
                invalid_product: true,
                ..Default::default()
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"licenses": [{"key": "sonar.a.license", "invalidProduct": true}]})
        );
    }

    #[test]
    fn test_reset_request_deserialization() {
        let request: ResetSettingsRequest =
            serde_json::from_str(r#"{"keys": ["a", "b"]}"#).unwrap();
        assert_eq!(request.keys, vec!["a", "b"]);
    }
}
