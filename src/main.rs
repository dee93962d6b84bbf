//! DSA Guide - Interactive data structures and algorithms tutorial
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use dsa_app::config::{self, Settings};
use dsa_app::AppState;
use dsa_content::Page;
use dsa_core::prelude::*;

/// DSA Guide - Interactive data structures and algorithms tutorial
#[derive(Parser, Debug)]
#[command(name = "dsa-guide", version)]
#[command(about = "Interactive data structures and algorithms tutorial", long_about = None)]
struct Args {
    /// Page to open: frameworks, recursion, strings or trees
    #[arg(value_name = "PAGE")]
    page: Option<String>,

    /// Config file (default: <config dir>/dsa-guide/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (commands on stdin, JSON on stdout)
    #[arg(long)]
    headless: bool,

    /// Write a commented default config file and exit
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
            return Err(Error::config("no config directory on this platform").into());
        };
        if config::init_config(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists: {}", path.display());
        }
        return Ok(());
    }

    // Logs go to a file since the TUI owns the screen and headless owns stdout
    dsa_core::logging::init()?;

    let settings = match &config_path {
        Some(path) => config::load_settings(path),
        None => Settings::default(),
    };

    let page = match args.page.as_deref() {
        Some(slug) => slug.parse::<Page>()?,
        None => settings.ui.start_page,
    };
    let state = AppState::with_page(page, settings);

    if args.headless {
        dsa_guide::run_headless(state).await?;
    } else {
        dsa_guide::run(state).await?;
    }
    Ok(())
}
