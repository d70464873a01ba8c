use redact::Secret;
use serde::{Deserialize, Deserializer};

pub const DEFAULT_BASE_URL: &str = "https://mdash.net/api/v2/devices";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Identifiers arrive from the environment, where a value made only of
/// digits is parsed as a number. They are opaque strings either way.
#[derive(Deserialize)]
#[serde(untagged)]
enum Opaque {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<Opaque> for String {
    fn from(value: Opaque) -> Self {
        match value {
            Opaque::Text(text) => text,
            Opaque::Unsigned(number) => number.to_string(),
            Opaque::Signed(number) => number.to_string(),
        }
    }
}

fn opaque<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Opaque::deserialize(deserializer).map(String::from)
}

fn opaque_option<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Opaque>::deserialize(deserializer)?.map(String::from))
}

fn opaque_secret<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Secret<String>>, D::Error> {
    Ok(opaque_option(deserializer)?.map(Secret::new))
}

/// Identity of the device on the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Device identifier, also the default label.
    #[serde(deserialize_with = "opaque")]
    pub id: String,

    /// Identifier of the device on the dashboard.
    #[serde(deserialize_with = "opaque_option")]
    pub mdash_device_id: Option<String>,

    /// Access token for the dashboard API.
    #[serde(deserialize_with = "opaque_secret")]
    pub api_key: Option<Secret<String>>,
}

impl DeviceConfig {
    /// Dashboard device id and access token, if both are set and non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &Secret<String>)> {
        let device_id = self
            .mdash_device_id
            .as_deref()
            .filter(|id| !id.is_empty())?;
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().is_empty())?;

        Some((device_id, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(
        mdash_device_id: Option<&str>,
        api_key: Option<&str>,
    ) -> DeviceConfig {
        DeviceConfig {
            id: "esp32_0A1B2C".to_string(),
            mdash_device_id: mdash_device_id.map(ToString::to_string),
            api_key: api_key.map(|key| Secret::new(key.to_string())),
        }
    }

    #[test]
    fn test_credentials_require_both_values() {
        assert!(device(None, Some("key")).credentials().is_none());
        assert!(device(Some("d1"), None).credentials().is_none());
        assert!(device(Some(""), Some("key")).credentials().is_none());
        assert!(device(Some("d1"), Some("")).credentials().is_none());

        let config = device(Some("d1"), Some("key"));
        let (device_id, api_key) = config.credentials().unwrap();
        assert_eq!(device_id, "d1");
        assert_eq!(api_key.expose_secret(), "key");
    }

    #[test]
    fn test_api_key_is_redacted_in_debug_output() {
        let config = device(Some("d1"), Some("very-secret"));

        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn test_numeric_identifiers_are_read_as_strings() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"id": 42, "mdash_device_id": 98765, "api_key": 123456}"#,
        )
        .unwrap();

        assert_eq!(config.id, "42");
        let (device_id, api_key) = config.credentials().unwrap();
        assert_eq!(device_id, "98765");
        assert_eq!(api_key.expose_secret(), "123456");
    }

    #[test]
    fn test_missing_identifiers_default() {
        let config: DeviceConfig =
            serde_json::from_str(r#"{"id": "esp32_0A1B2C"}"#).unwrap();

        assert_eq!(config.id, "esp32_0A1B2C");
        assert!(config.mdash_device_id.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_base_url_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
