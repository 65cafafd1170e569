//! Postboard Library
//!
//! A terminal client for browsing the users, posts and comments of a JSON
//! data service, and for adding comments.
//!
//! The work is split across the workspace crates; this crate resolves the
//! effective settings and starts the TUI.

use std::path::Path;

use postboard_app::config::{self, Settings};
use postboard_core::prelude::*;

// Re-export the workspace crates under short names
pub use postboard_app as app;
pub use postboard_client as client;
pub use postboard_tui as tui;

/// Resolve the settings to run with.
///
/// Precedence, lowest first: built-in defaults, the config file (`config_path`
/// or the platform default), then `base_url` from the command line. The
/// result is validated.
pub fn resolve_settings(config_path: Option<&Path>, base_url: Option<String>) -> Result<Settings> {
    let settings = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            config::load_settings_from(path)
        }
        None => config::load_settings(),
    };

    let settings = settings.with_base_url(base_url);
    settings.validate()?;
    Ok(settings)
}

/// Run the TUI until the operator quits
pub async fn run(settings: Settings) -> Result<()> {
    postboard_tui::run(settings).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(config::CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_file_sets_base_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"http://localhost:3000\"\n");

        let settings = resolve_settings(Some(&path), None).unwrap();

        assert_eq!(settings.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"http://localhost:3000\"\n");

        let settings =
            resolve_settings(Some(&path), Some("https://api.example.com".to_string())).unwrap();

        assert_eq!(settings.api.base_url, "https://api.example.com");
    }

    #[test]
    fn test_invalid_base_url_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let err = resolve_settings(Some(&path), Some("::nope::".to_string())).unwrap_err();

        assert!(err.is_fatal());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();

        let err = resolve_settings(Some(&dir.path().join("absent.toml")), None).unwrap_err();

        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
