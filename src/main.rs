use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use toolshelf::app::{App, AppEvent};
use toolshelf::catalog::{self, CatalogSource};
use toolshelf::config::Config;
use toolshelf::theme::ThemeVariant;
use toolshelf::ui;

/// Get the config directory path (~/.config/toolshelf/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("toolshelf"))
}

#[derive(Parser, Debug)]
#[command(name = "toolshelf", about = "Terminal browser for a curated tool catalog")]
struct Args {
    /// Catalog source: an http(s) URL or a local JSON file path.
    /// Overrides the `catalog` config key.
    #[arg(long, value_name = "URL_OR_PATH")]
    catalog: Option<String>,

    /// Theme variant (dark or light). Overrides the `theme` config key.
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
    }

    let config = Config::load(&config_dir.join("config.toml")).context("Failed to load config")?;

    // CLI flag beats config key beats the default path in the config dir.
    let raw_source = args
        .catalog
        .or(config.catalog)
        .unwrap_or_else(|| config_dir.join("catalog.json").display().to_string());
    let source = CatalogSource::parse(&raw_source)
        .with_context(|| format!("Invalid catalog source: {}", raw_source))?;

    let theme_name = args.theme.unwrap_or(config.theme);
    let variant = ThemeVariant::from_str_name(&theme_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown theme: {} (expected dark or light)", theme_name))?;

    let mut app = App::new();
    app.set_theme(variant);

    // One-shot background load; the result arrives over the event channel.
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(8);
    tokio::spawn(async move {
        let result = catalog::load(&source).await;
        let _ = event_tx.send(AppEvent::CatalogLoaded(result)).await;
    });

    ui::run(&mut app, event_rx).await?;

    Ok(())
}
