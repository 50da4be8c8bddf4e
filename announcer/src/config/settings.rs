// Announcer settings. The embedded default.json is the source of truth; a user
// file only needs the keys it wants to change.
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AnnouncerError, Result};

pub const WEBHOOK_ENV_VAR: &str = "RATE_WEBHOOK_URL";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AnnouncerSettings {
    pub version: String,
    pub message: MessageSettings,
    pub timing: TimingSettings,
    pub share: ShareSettings,
    pub webhook: WebhookSettings,
}

/// How the address field is rendered in the message.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AddressStyle {
    /// "street|contact|map" split into an Address line and a Location line.
    #[default]
    Split,
    /// The whole field on one line behind a location pin.
    Raw,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MessageSettings {
    pub default_shop_name: String,
    // Shown in place of a missing gold or silver rate.
    pub placeholder: String,
    pub address_style: AddressStyle,
}

impl Default for MessageSettings {
    fn default() -> Self {
        MessageSettings {
            default_shop_name: "VENKATESWARA JEWELLER'S".to_string(),
            placeholder: "—".to_string(),
            address_style: AddressStyle::Split,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TimingSettings {
    pub loading_delay_ms: u64,
    pub share_delay_ms: u64,
    pub debounce_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        TimingSettings {
            loading_delay_ms: 300,
            share_delay_ms: 500,
            debounce_ms: 1000,
        }
    }
}

impl TimingSettings {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn share_delay(&self) -> Duration {
        Duration::from_millis(self.share_delay_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShareSettings {
    pub whatsapp_base_url: String,
    pub download_prefix: String,
    pub download_dir: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        ShareSettings {
            whatsapp_base_url: "https://wa.me/".to_string(),
            download_prefix: "royal-rate-".to_string(),
            download_dir: ".".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WebhookSettings {
    // No endpoint means the rate log is skipped entirely.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        WebhookSettings {
            endpoint: None,
            timeout_secs: 10,
        }
    }
}

impl WebhookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AnnouncerSettings {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        let settings: AnnouncerSettings = serde_json::from_str(config_str)?;
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            AnnouncerError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let settings: AnnouncerSettings = serde_json::from_str(&config_str)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "Loaded settings from file");
        Ok(settings)
    }

    /// Default settings, or the given file, with `RATE_WEBHOOK_URL` applied on top.
    /// The merged result is validated, whichever source each value came from.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(p) => Self::load_from_path(p)?,
            None => Self::load_default()?,
        };
        settings
            .with_webhook_override(std::env::var(WEBHOOK_ENV_VAR).ok())
            .validated()
    }

    pub fn with_webhook_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(url) = endpoint.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Rate log endpoint taken from {}", WEBHOOK_ENV_VAR);
            self.webhook.endpoint = Some(url.trim().to_string());
        }
        self
    }

    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    // Rate log endpoints must be HTTPS.
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.webhook.endpoint {
            if !endpoint.starts_with("https://") {
                return Err(AnnouncerError::ConfigError(format!(
                    "webhook endpoint must be an https URL, got '{}'",
                    endpoint
                )));
            }
        }
        if self.share.download_prefix.contains(['/', '\\']) {
            return Err(AnnouncerError::ConfigError(
                "download prefix must not contain path separators".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_embedded_default_matches_struct_defaults() {
        let settings = AnnouncerSettings::load_default().unwrap();
        assert_eq!(settings.version, "1.0.0");
        assert_eq!(
            settings.message.default_shop_name,
            MessageSettings::default().default_shop_name
        );
        assert_eq!(settings.message.placeholder, "—");
        assert_eq!(settings.message.address_style, AddressStyle::Split);
        assert_eq!(settings.timing.loading_delay_ms, 300);
        assert_eq!(settings.timing.share_delay_ms, 500);
        assert_eq!(settings.timing.debounce_ms, 1000);
        assert_eq!(settings.share.download_prefix, "royal-rate-");
        assert!(settings.webhook.endpoint.is_none());
    }

    #[test]
    fn test_partial_user_file_keeps_other_defaults() {
        let file = write_config(r#"{ "message": { "address_style": "raw" } }"#);
        let settings = AnnouncerSettings::load_from_path(file.path()).unwrap();
        assert_eq!(settings.message.address_style, AddressStyle::Raw);
        assert_eq!(settings.message.placeholder, "—");
        assert_eq!(settings.timing.share_delay_ms, 500);
    }

    #[test]
    fn test_rejects_non_https_endpoint_in_file() {
        let file = write_config(r#"{ "webhook": { "endpoint": "ftp://example.com" } }"#);
        let err = AnnouncerSettings::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("https URL"));

        let file = write_config(r#"{ "webhook": { "endpoint": "http://example.com" } }"#);
        assert!(AnnouncerSettings::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_embedded_default_passes_validation() {
        assert!(AnnouncerSettings::load_default().unwrap().validated().is_ok());
    }

    #[test]
    fn test_webhook_override_is_validated() {
        let plain = AnnouncerSettings::load_default()
            .unwrap()
            .with_webhook_override(Some("http://hooks.example/rates".to_string()))
            .validated();
        assert!(matches!(plain, Err(AnnouncerError::ConfigError(_))));

        let secure = AnnouncerSettings::load_default()
            .unwrap()
            .with_webhook_override(Some("https://hooks.example/rates".to_string()))
            .validated()
            .unwrap();
        assert_eq!(secure.webhook.endpoint.as_deref(), Some("https://hooks.example/rates"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let missing = Path::new("/nonexistent/rates.json");
        let err = AnnouncerSettings::load_from_path(missing).unwrap_err();
        assert!(matches!(err, AnnouncerError::ConfigError(_)));
    }

    #[test]
    fn test_webhook_override() {
        let settings = AnnouncerSettings::default()
            .with_webhook_override(Some(" https://hooks.example/rates ".to_string()));
        assert_eq!(settings.webhook.endpoint.as_deref(), Some("https://hooks.example/rates"));

        let untouched = AnnouncerSettings::default().with_webhook_override(Some("  ".to_string()));
        assert!(untouched.webhook.endpoint.is_none());
    }
}
