//! Goku Panel - terminal control panel for the Goku IR/AC and LED ring device
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use gpanel_app::config::{self, LocalStore};
use gpanel_app::Engine;
use gpanel_gateway::HttpGateway;
use tracing::info;

/// Goku Panel - control an IR/AC and LED ring device over its REST gateway
#[derive(Parser, Debug)]
#[command(name = "gpanel")]
#[command(about = "Terminal control panel for the Goku IR/AC and LED ring device", long_about = None)]
struct Args {
    /// Device base URL, e.g. http://192.168.4.1 (overrides config.toml)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with debug metrics visible (not persisted)
    #[arg(long)]
    debug: bool,

    /// Write a default config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args
        .config
        .or_else(config::default_config_path)
        .ok_or_else(|| eyre!("No config directory on this platform; pass --config"))?;

    if args.init_config {
        if config::init_config_file(&config_path)? {
            println!("Wrote {}", config_path.display());
        } else {
            println!("{} already exists", config_path.display());
        }
        return Ok(());
    }

    gpanel_core::logging::init()?;

    let mut settings = config::load_settings(&config_path);
    if let Some(url) = args.url {
        settings.device.url = url;
    }
    info!("Using device at {}", settings.device.url);

    let gateway = HttpGateway::new(&settings.device.url, settings.device.request_timeout())?;
    let store = LocalStore::open(LocalStore::default_path());

    let mut engine = Engine::new(Arc::new(gateway), settings, store);
    if args.debug {
        engine.state.debug_mode = true;
    }

    gpanel_tui::run(engine).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_overrides() {
        let args = Args::parse_from(["gpanel", "--url", "http://goku.local", "--debug"]);
        assert_eq!(args.url.as_deref(), Some("http://goku.local"));
        assert!(args.debug);
        assert!(args.config.is_none());
        assert!(!args.init_config);
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
