//! Application configuration.

pub mod app_config;
pub mod args;

pub use app_config::{AppConfig, GalleryConfig};
pub use args::CliArgs;
