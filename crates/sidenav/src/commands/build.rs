//! `sidenav build` command implementation.

use std::path::PathBuf;

use clap::Args;
use sidenav_site::SiteManifest;

use super::{SiteArgs, sidebar_builder};
use crate::error::CliError;
use crate::output::{Output, write_stdout};

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,

    /// Write the manifest to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Public base path the site is served under (overrides config).
    #[arg(long)]
    base: Option<String>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a track cannot be read, or the
    /// manifest cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let manifest = self.manifest()?;
        let json = manifest.to_json_pretty()?;

        let Some(path) = &self.output else {
            write_stdout(&json)?;
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, format!("{json}\n"))?;

        let sidebar = &manifest.theme_config.sidebar;
        Output::new().success(&format!(
            "Wrote {} ({} groups, {} pages)",
            path.display(),
            sidebar.groups.len(),
            sidebar.page_count()
        ));
        Ok(())
    }

    fn manifest(&self) -> Result<SiteManifest, CliError> {
        let config = self.site.load_config(self.base.clone())?;
        let sidebar = sidebar_builder(&config).build()?;
        Ok(SiteManifest::new(&config.site_resolved, sidebar))
    }
}
