mod config;
mod content;
mod core;
mod ui;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, CliArgs};
use ui::Invitation;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(file).with_ansi(false))
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    if let Some(path) = &config.config {
        info!(path = %path.display(), "Loaded configuration");
    }

    info!(
        asset_root = %config.asset_root.display(),
        splash = config.splash.enabled,
        "Starting invitation"
    );

    iced::application(Invitation::title, Invitation::update, Invitation::view)
        .subscription(Invitation::subscription)
        .theme(Invitation::theme)
        .run_with(move || Invitation::new(config))?;

    Ok(())
}
