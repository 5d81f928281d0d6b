//! License blob decoding
//!
//! A stored license is Base64 text wrapping `Key: value` lines. Decoding is
//! lenient: anything unreadable ends up as an absent field, never an error.

use std::collections::BTreeMap;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Date format of the expiration field
pub const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

const PRODUCT: &str = "Product";
const PLUGIN: &str = "Plugin";
const ORGANISATION: &str = "Organisation";
const NAME: &str = "Name";
const EXPIRATION: &str = "Expiration";
const EXPIRES: &str = "Expires";
const TYPE: &str = "Type";
const SERVER: &str = "Server";

/// Never exposed as additional properties
const HIDDEN: [&str; 2] = ["Digest", "Obeo"];

/// A decoded license
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    server: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    license_type: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    additional_properties: BTreeMap<String, String>,
}

impl License {
    /// Decodes a Base64 license value
    pub fn read_base64(encoded: &str) -> Self {
        match decode_base64(encoded) {
            Some(bytes) => Self::read_plain_text(&String::from_utf8_lossy(&bytes)),
            None => Self::default(),
        }
    }

    /// Parses the `Key: value` lines of an already decoded license
    pub fn read_plain_text(data: &str) -> Self {
        let mut properties = BTreeMap::new();

        for line in data.lines() {
            if line.trim().is_empty() {
                continue;
            }

            // A leading ':' means an empty key, which is skipped like a line without ':'
            if let Some((key, value)) = line.split_once(':') {
                if !key.is_empty() {
                    properties.insert(key.trim().to_string(), value.trim().to_string());
                }
            }
        }

        Self::from_properties(properties)
    }

    fn from_properties(mut properties: BTreeMap<String, String>) -> Self {
        let product = take_first(&mut properties, PRODUCT, PLUGIN);
        let organization = take_first(&mut properties, ORGANISATION, NAME);
        let expiration = take_first(&mut properties, EXPIRATION, EXPIRES);
        let license_type = properties.remove(TYPE);
        let server = properties.remove(SERVER);

        for hidden in HIDDEN {
            properties.remove(hidden);
        }

        Self {
            product,
            organization,
            expiration,
            server,
            license_type,
            additional_properties: properties,
        }
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Expiration exactly as written in the license
    pub fn expiration_as_str(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    /// Parsed expiration date, `None` when missing or malformed
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, EXPIRATION_DATE_FORMAT).ok())
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn license_type(&self) -> Option<&str> {
        self.license_type.as_deref()
    }

    pub fn additional_properties(&self) -> &BTreeMap<String, String> {
        &self.additional_properties
    }

    /// A license stays valid through its expiration day
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date().is_some_and(|date| date < today)
    }
}

fn take_first(properties: &mut BTreeMap<String, String>, primary: &str, fallback: &str) -> Option<String> {
    let primary = properties.remove(primary);
    let fallback = properties.remove(fallback);
    primary.or(fallback)
}

/// Accepts padded or unpadded input and ignores non-zero trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// URL-safe characters are folded into the standard alphabet. Anything
/// outside both alphabets, padding included, is skipped.
fn decode_base64(encoded: &str) -> Option<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter_map(|c| match c {
            '-' => Some('+'),
            '_' => Some('/'),
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => Some(c),
            _ => None,
        })
        .collect();

    LENIENT.decode(compact).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use base64::engine::general_purpose::{STANDARD, URL_SAFE};

    fn encode(text: &str) -> String {
        STANDARD.encode(text)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, EXPIRATION_DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_read_all_fields() {
        let license = License::read_base64(&encode(
            "Product: cpp\nOrganisation: Acme\nExpiration: 2030-01-31\nServer: srv-1\nType: PRODUCTION\nEdition: enterprise\n",
        ));

        assert_eq!(license.product(), Some("cpp"));
        assert_eq!(license.organization(), Some("Acme"));
        assert_eq!(license.expiration_as_str(), Some("2030-01-31"));
        assert_eq!(license.expiration_date(), Some(date("2030-01-31")));
        assert_eq!(license.server(), Some("srv-1"));
        assert_eq!(license.license_type(), Some("PRODUCTION"));
        assert_eq!(
            license.additional_properties().get("Edition").map(String::as_str),
            Some("enterprise")
        );
        assert_eq!(license.additional_properties().len(), 1);
    }

    #[test]
    fn test_fallback_keys() {
        let license = License::read_plain_text("Plugin: abap\nName: Initech\nExpires: 2012-04-01\n");

        assert_eq!(license.product(), Some("abap"));
        assert_eq!(license.organization(), Some("Initech"));
        assert_eq!(license.expiration_as_str(), Some("2012-04-01"));
        assert!(license.additional_properties().is_empty());
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let license = License::read_plain_text("Plugin: old\nProduct: new\n");

        assert_eq!(license.product(), Some("new"));
        assert!(!license.additional_properties().contains_key("Plugin"));
    }

    #[test]
    fn test_hidden_properties_are_dropped() {
        let license = License::read_plain_text("Product: a\nDigest: abcdef\nObeo: x\nSupport: yes\n");

        let keys: Vec<_> = license.additional_properties().keys().cloned().collect();
        assert_eq!(keys, vec!["Support".to_string()]);
    }

    #[test]
    fn test_value_keeps_colons_after_first() {
        let license = License::read_plain_text("Url: http://example.com:9000\n");

        assert_eq!(
            license.additional_properties().get("Url").map(String::as_str),
            Some("http://example.com:9000")
        );
    }

    #[test]
    fn test_ignores_blank_and_keyless_lines() {
        let license = License::read_plain_text("\n   \nno separator\n: orphan\nProduct:  a  \n");

        assert_eq!(license.product(), Some("a"));
        assert!(license.additional_properties().is_empty());
    }

    #[test]
    fn test_invalid_base64_is_empty_license() {
        let license = License::read_base64("%%% not base64 %%%");
        assert_eq!(license, License::default());
    }

    #[test]
    fn test_base64_with_whitespace_and_no_padding() {
        let encoded = encode("Product: a\n");
        let wrapped = format!("{}\n{}", &encoded[..4], encoded[4..].trim_end_matches('='));

        assert_eq!(License::read_base64(&wrapped).product(), Some("a"));
    }

    #[test]
    fn test_base64_url_safe_alphabet() {
        // "a?>" encodes to "YT8+", which becomes "YT8-" in the URL-safe alphabet
        let text = "Product: a?>\nServer: *\n";
        let encoded = URL_SAFE.encode(text);
        assert!(encoded.contains('_') || encoded.contains('-'));

        let license = License::read_base64(&encoded);

        assert_eq!(license.product(), Some("a?>"));
        assert_eq!(license.server(), Some("*"));
    }

    #[test]
    fn test_base64_skips_characters_outside_alphabet() {
        let encoded = encode("Product: cpp\n");
        let noisy = format!("{}!{}", &encoded[..4], &encoded[4..]);

        assert_eq!(License::read_base64(&noisy).product(), Some("cpp"));
    }

    #[test]
    fn test_expiration_is_inclusive() {
        let license = License::read_plain_text("Expiration: 2020-06-15\n");

        assert!(!license.is_expired(date("2020-06-14")));
        assert!(!license.is_expired(date("2020-06-15")));
        assert!(license.is_expired(date("2020-06-16")));
    }

    #[test]
    fn test_unparseable_expiration_never_expires() {
        let license = License::read_plain_text("Expiration: someday\n");

        assert_eq!(license.expiration_as_str(), Some("someday"));
        assert!(license.expiration_date().is_none());
        assert!(!license.is_expired(date("2100-01-01")));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let license = License::read_plain_text("Product: a\nType: EVALUATION\n");
        let json = serde_json::to_value(&license).unwrap();

        assert_eq!(json, serde_json::json!({"product": "a", "type": "EVALUATION"}));
    }
}
