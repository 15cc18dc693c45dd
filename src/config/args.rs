use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "wedding-invitation",
    version,
    about = "Wedding invitation with a photo gallery and guest information",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Static asset root containing the gallery directory.
    #[arg(long, value_name = "DIR", env = "INVITATION_ASSET_ROOT")]
    pub asset_root: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Go straight to the invitation without the splash screen.
    #[arg(long)]
    pub skip_splash: bool,
}
