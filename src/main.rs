//! mealdeck - A terminal recipe browser for TheMealDB
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use mealdeck_app::config;
use mealdeck_core::prelude::*;

/// mealdeck - Browse TheMealDB recipes in the terminal
#[derive(Parser, Debug)]
#[command(name = "mealdeck", version)]
#[command(about = "Browse TheMealDB recipes in the terminal", long_about = None)]
struct Args {
    /// Config file (default: <config dir>/mealdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Recipe API base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Run this search on startup
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            return Err(Error::config("No config directory on this platform").into());
        };
        if config::init_config_file(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists", path.display());
        }
        return Ok(());
    }

    // Initialize logging (to file, since the TUI owns stdout)
    let log_dir = mealdeck_core::logging::init()?;

    let mut settings = match &config_path {
        Some(path) => config::load_settings(path),
        None => config::Settings::default(),
    };
    if let Some(base) = args.api_base {
        settings.api.base_url = base;
    }
    info!(
        "Settings: base_url={} start_view={}",
        settings.api.base_url, settings.ui.start_view
    );

    let result = mealdeck_tui::run(settings, args.search).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("mealdeck exiting");
    result.wrap_err_with(|| format!("see the log in {}", log_dir.display()))
}
