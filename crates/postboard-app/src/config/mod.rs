//! Configuration file parsing for Postboard
//!
//! Supports `<config_dir>/postboard/config.toml` (or an explicit path) with
//! an `[api]` and a `[ui]` section. Every key is optional.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, CONFIG_FILENAME,
};
pub use types::*;
