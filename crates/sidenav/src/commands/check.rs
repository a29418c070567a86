//! `sidenav check` command implementation.

use clap::Args;
use sidenav_site::{TrackScan, TrackState};

use super::{SiteArgs, sidebar_builder};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,
}

impl CheckArgs {
    /// Report what each configured track contributes to the sidebar.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(None)?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        } else {
            output.info("Config: defaults (no sidenav.toml found)");
        }
        output.highlight(&format!(
            "Site root: {}",
            config.site_resolved.root.display()
        ));

        let scans = sidebar_builder(&config).scan()?;
        for scan in &scans {
            match &scan.state {
                TrackState::Group(group) if group.label.is_empty() => {
                    output.warning(&describe(scan));
                }
                TrackState::Group(_) => output.success(&describe(scan)),
                TrackState::Empty => output.warning(&describe(scan)),
                TrackState::Missing => output.muted(&describe(scan)),
            }
        }

        let groups = scans
            .iter()
            .filter(|s| matches!(s.state, TrackState::Group(_)))
            .count();
        output.info(&format!(
            "{groups} of {} tracks contribute to the sidebar",
            scans.len()
        ));
        Ok(())
    }
}

/// One-line description of a track scan.
fn describe(scan: &TrackScan) -> String {
    match &scan.state {
        TrackState::Missing => format!("  {}: missing", scan.track),
        TrackState::Empty => format!("  {}: empty", scan.track),
        TrackState::Group(group) if group.label.is_empty() => format!(
            "  {}: {} (group label is empty)",
            scan.track,
            page_count(group.entries.len())
        ),
        TrackState::Group(group) => format!(
            "  {}: {} as \"{}\"",
            scan.track,
            page_count(group.entries.len()),
            group.label
        ),
    }
}

fn page_count(n: usize) -> String {
    if n == 1 {
        "1 page".to_owned()
    } else {
        format!("{n} pages")
    }
}
