//! Sidebar navigation and site manifest generation for sidenav.
//!
//! This crate provides:
//! - [`SidebarBuilder`]: scans track directories and builds a [`Sidebar`]
//! - [`SiteManifest`]: the configuration object handed to the site generator
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sidenav_config::Config;
//! use sidenav_site::{SidebarBuilder, SiteManifest};
//!
//! let config = Config::load(None, None)?;
//! let sidebar = SidebarBuilder::new(&config.site_resolved.root, &config.sidebar.tracks).build()?;
//! let manifest = SiteManifest::new(&config.site_resolved, sidebar);
//! let json = manifest.to_json_pretty()?;
//! # let _ = json;
//! # Ok(())
//! # }
//! ```

mod error;
mod manifest;
mod scanner;
mod sidebar;
mod slug;

pub use error::SidebarError;
pub use manifest::{SiteManifest, ThemeConfig};
pub use sidebar::{NavGroup, NavItem, Sidebar, SidebarBuilder, TrackScan, TrackState};
