//! Postboard - browse users, posts and comments from the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use postboard::app::config;
use postboard::resolve_settings;

/// Postboard - browse users, posts and comments from the terminal
#[derive(Parser, Debug)]
#[command(name = "postboard", version)]
#[command(about = "Browse users, posts and comments of a JSON API", long_about = None)]
struct Args {
    /// Base URL of the data service (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .or_else(config::default_config_path)
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory on this platform"))?;
        config::init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    // The terminal belongs to the TUI; logs go to a file
    if let Err(e) = postboard_core::logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let settings = resolve_settings(args.config.as_deref(), args.base_url)?;
    tracing::info!("Resolved settings: {:?}", settings);

    postboard::run(settings).await?;
    Ok(())
}
