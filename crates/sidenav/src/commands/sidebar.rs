//! `sidenav sidebar` command implementation.

use clap::Args;

use super::{SiteArgs, sidebar_builder};
use crate::error::CliError;
use crate::output::write_stdout;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,
}

impl SidebarArgs {
    /// Print the generated sidebar as JSON on stdout.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        write_stdout(&self.render()?)?;
        Ok(())
    }

    fn render(&self) -> Result<String, CliError> {
        let config = self.site.load_config(None)?;
        let sidebar = sidebar_builder(&config).build()?;
        Ok(serde_json::to_string_pretty(&sidebar)?)
    }
}
