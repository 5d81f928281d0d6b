//! License listing: one validated entry per registered license setting

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::property::{Property, PERMANENT_SERVER_ID};

use super::License;

/// Server id granting a license to every installation
pub const ALL_SERVERS_VALUE: &str = "*";

/// One row of the license listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseEntry {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_product: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_expiration: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_server_id: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl LicenseEntry {
    fn unset(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    fn from_setting(setting: &Property, installation_id: Option<&str>, today: NaiveDate) -> Self {
        let license = License::read_base64(setting.value());
        let product = license.product();
        let server = license.server();

        let server_id_valid = server == Some(ALL_SERVERS_VALUE)
            || installation_id.is_none()
            || server == installation_id;

        let additional_properties = license.additional_properties();

        Self {
            key: setting.key().to_string(),
            value: Some(setting.value().to_string()),
            product: product.map(str::to_string),
            organization: license.organization().map(str::to_string),
            expiration: license.expiration_as_str().map(str::to_string),
            server_id: server.map(str::to_string),
            license_type: license.license_type().map(str::to_string),
            additional_properties: (!additional_properties.is_empty())
                .then(|| additional_properties.clone()),
            invalid_product: product.is_none_or(|p| !setting.key().contains(p)),
            invalid_expiration: license.is_expired(today),
            invalid_server_id: !server_id_valid,
        }
    }
}

/// Identity of this installation, if one has been stored
pub fn server_id(properties: &[Property]) -> Option<&str> {
    properties
        .iter()
        .find(|property| property.is_server_id())
        .map(Property::value)
}

/// Builds one entry per license key, ordered by key.
///
/// `properties` holds whatever is stored for `license_keys`; keys without a
/// stored value still get an entry carrying only the key. The server id key is
/// never listed even when present in `license_keys`.
pub fn build_license_entries(
    license_keys: &BTreeSet<String>,
    properties: &[Property],
    installation_id: Option<&str>,
    today: NaiveDate,
) -> Vec<LicenseEntry> {
    let settings_by_key: HashMap<&str, &Property> = properties
        .iter()
        .map(|property| (property.key(), property))
        .collect();

    license_keys
        .iter()
        .filter(|key| key.as_str() != PERMANENT_SERVER_ID)
        .map(|key| match settings_by_key.get(key.as_str()) {
            Some(setting) => LicenseEntry::from_setting(setting, installation_id, today),
            None => LicenseEntry::unset(key),
        })
        .collect()
}
