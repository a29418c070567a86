//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use sidenav_config::{CliSettings, Config};
use sidenav_site::SidebarBuilder;

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use sidebar::SidebarArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site root containing the track directories (overrides config).
    #[arg(short, long, env = "SIDENAV_ROOT")]
    root: Option<PathBuf>,

    /// Enable verbose output (log every track as it is scanned).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SiteArgs {
    /// Load configuration, applying CLI overrides.
    pub(crate) fn load_config(&self, base: Option<String>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root: self.root.clone(),
            base,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Sidebar builder for a loaded configuration.
pub(crate) fn sidebar_builder(config: &Config) -> SidebarBuilder {
    SidebarBuilder::new(&config.site_resolved.root, &config.sidebar.tracks)
}
