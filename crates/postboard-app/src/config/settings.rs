//! Settings loader for config.toml

use super::types::Settings;
use postboard_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "postboard";

/// `<config_dir>/postboard/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location, falling back to defaults
pub fn load_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No platform config directory, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from `config_path`
///
/// A missing, unreadable or unparsable file yields the defaults; problems
/// are logged rather than surfaced.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file at `config_path` unless one exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let default_content = format!(
        r#"# Postboard Configuration

[api]
# Base URL of the data service; endpoint paths such as /users are appended
base_url = "{}"

[ui]
# Show key hints in the header
show_key_hints = true
"#,
        Settings::default().api.base_url
    );

    std::fs::write(config_path, default_content)
        .with_context(|| format!("Failed to write config file {:?}", config_path))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://localhost:4000/api"

[ui]
show_key_hints = false
"#,
        )
        .unwrap();

        let settings = load_settings_from(&path);

        assert_eq!(settings.api.base_url, "http://localhost:4000/api");
        assert!(!settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_writes_valid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nshow_key_hints = false\n").unwrap();

        init_config_file(&path).unwrap();

        assert!(!load_settings_from(&path).ui.show_key_hints);
    }

    #[test]
    fn test_init_config_file_reports_io_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config_file(&blocker.join(CONFIG_FILENAME)).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert!(!blocker.join(CONFIG_FILENAME).exists());
    }
}
