//! sidenav CLI - sidebar generator for track-organised documentation sites.
//!
//! Provides commands for:
//! - `sidebar`: Print the generated sidebar as JSON
//! - `build`: Write the full site manifest as JSON
//! - `check`: Report what each configured track contributes

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, SidebarArgs};
use output::Output;

/// sidenav - sidebar generator for documentation sites.
#[derive(Parser)]
#[command(name = "sidenav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generated sidebar as JSON.
    Sidebar(SidebarArgs),
    /// Write the site manifest (site settings and sidebar) as JSON.
    Build(BuildArgs),
    /// Report which tracks contribute a sidebar group.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Sidebar(args) => args.site.verbose,
            Self::Build(args) => args.site.verbose,
            Self::Check(args) => args.site.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sidebar(args) => args.execute(),
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
