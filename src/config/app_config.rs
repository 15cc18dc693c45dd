//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::args::CliArgs;
use crate::content::SiteContent;
use crate::core::{Category, SplashSchedule};

const APP_NAME: &str = "wedding-invitation";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "sheokand";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Static asset root; the gallery directory and attire images live here.
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,

    #[serde(default)]
    pub splash: SplashConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub content: SiteContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_progress_step")]
    pub progress_step: u8,

    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,

    #[serde(default = "default_fade_delay_ms")]
    pub fade_delay_ms: u64,

    #[serde(default = "default_fade_duration_ms")]
    pub fade_duration_ms: u64,
}

impl SplashConfig {
    pub fn schedule(&self) -> SplashSchedule {
        SplashSchedule {
            progress_step: self.progress_step,
            progress_interval: Duration::from_millis(self.progress_interval_ms),
            fade_delay: Duration::from_millis(self.fade_delay_ms),
            fade_duration: Duration::from_millis(self.fade_duration_ms),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            progress_step: default_progress_step(),
            progress_interval_ms: default_progress_interval_ms(),
            fade_delay_ms: default_fade_delay_ms(),
            fade_duration_ms: default_fade_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Directory under the asset root holding the photos.
    #[serde(default = "default_gallery_directory")]
    pub directory: String,

    #[serde(default = "default_gallery_directory")]
    pub category: String,

    /// Re-read the directory every time the gallery page opens, so photos
    /// added while running show up.
    #[serde(default = "default_true")]
    pub relist_on_visit: bool,

    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl GalleryConfig {
    pub fn category(&self) -> Category {
        Category::new(self.category.clone())
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            directory: default_gallery_directory(),
            category: default_gallery_directory(),
            relist_on_visit: true,
            columns: default_columns(),
        }
    }
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_gallery_directory() -> String {
    "gallery".to_string()
}

fn default_true() -> bool {
    true
}

fn default_progress_step() -> u8 {
    2
}

fn default_progress_interval_ms() -> u64 {
    160
}

fn default_fade_delay_ms() -> u64 {
    8000
}

fn default_fade_duration_ms() -> u64 {
    500
}

fn default_columns() -> usize {
    3
}

impl AppConfig {
    /// Loads the configuration file.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and defaults apply when nothing is there.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path_override {
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config = Some(path.to_path_buf());
        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(asset_root) = args.asset_root {
            self.asset_root = asset_root;
        }
        if args.skip_splash {
            self.splash.enabled = false;
        }
    }

    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            asset_root: default_asset_root(),
            splash: SplashConfig::default(),
            gallery: GalleryConfig::default(),
            content: SiteContent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.asset_root, PathBuf::from("public"));
        assert!(config.splash.enabled);
        assert_eq!(config.splash.schedule(), SplashSchedule::default());
        assert_eq!(config.gallery.directory, "gallery");
        assert!(config.gallery.relist_on_visit);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            asset_root = "/srv/invitation"
            log_level = "debug"

            [splash]
            fade_delay_ms = 3000

            [gallery]
            relist_on_visit = false
            columns = 4
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.asset_root, PathBuf::from("/srv/invitation"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.splash.schedule().fade_delay, Duration::from_secs(3));
        assert_eq!(config.splash.progress_step, 2);
        assert!(!config.gallery.relist_on_visit);
        assert_eq!(config.gallery.columns, 4);
        assert_eq!(config.gallery.category().as_str(), "gallery");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");

        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        std::io::Write::write_all(&mut file, b"asset_root = [").expect("write");

        let result = AppConfig::load(Some(file.path()));

        assert!(matches!(result, Err(ConfigError::TomlDe(_))));
    }

    #[test]
    fn test_load_records_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        std::io::Write::write_all(&mut file, b"[gallery]\ndirectory = \"photos\"\n").expect("write");

        let config = AppConfig::load(Some(file.path())).expect("load");

        assert_eq!(config.config.as_deref(), Some(file.path()));
        assert_eq!(config.gallery.directory, "photos");
    }

    #[test]
    fn test_args_override_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::try_parse_from([
            "wedding-invitation",
            "--asset-root",
            "site",
            "--log-level",
            "warn",
            "--skip-splash",
        ])
        .expect("parse args");

        config.merge_with_args(args);

        assert_eq!(config.asset_root, PathBuf::from("site"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.splash.enabled);
    }
}
