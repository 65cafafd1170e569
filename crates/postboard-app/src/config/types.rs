//! Configuration types for Postboard

use postboard_client::DEFAULT_BASE_URL;
use postboard_core::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Data service connection
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Presentation preferences
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiSettings {
    /// Show key hints in the header
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Replace the base URL, e.g. from a command line flag
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        self
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            Error::config_invalid(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::config_invalid(format!(
                "api.base_url '{}' cannot be used as a base URL",
                self.api.base_url
            )));
        }
        Ok(())
    }

    /// Host shown in the header
    pub fn api_host(&self) -> String {
        Url::parse(&self.api.base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| self.api.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(settings.ui.show_key_hints);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[ui]\nshow_key_hints = false\n").unwrap();
        assert!(!settings.ui.show_key_hints);
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_overrides() {
        let settings = Settings::default().with_base_url(Some("http://localhost:3000".into()));
        assert_eq!(settings.api.base_url, "http://localhost:3000");

        let unchanged = Settings::default().with_base_url(None);
        assert_eq!(unchanged.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let settings = Settings::default().with_base_url(Some("not a url".into()));
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_validate_rejects_mailto() {
        let settings = Settings::default().with_base_url(Some("mailto:a@b.com".into()));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_api_host() {
        let settings = Settings::default().with_base_url(Some("https://api.example.com/v1".into()));
        assert_eq!(settings.api_host(), "api.example.com");
    }
}
