//! Sidebar construction from track directories.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::SidebarError;
use crate::scanner::markdown_stems;
use crate::slug::{group_label, item_label};

/// Sidebar entry for one markdown page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    #[serde(rename = "text")]
    pub label: String,
    /// Link target, `/<track>/<stem>`.
    pub link: String,
}

/// Sidebar section for one track directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display label.
    #[serde(rename = "text")]
    pub label: String,
    /// Whether the section starts collapsed. Always `false` for generated groups.
    pub collapsed: bool,
    /// Pages in directory-listing order.
    #[serde(rename = "items")]
    pub entries: Vec<NavItem>,
}

/// Ordered sidebar sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    /// Groups in configured track order.
    pub groups: Vec<NavGroup>,
}

impl Sidebar {
    /// Total number of pages across all groups.
    pub fn page_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// Outcome of scanning one track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackState {
    /// Directory does not exist under the site root.
    Missing,
    /// Directory exists but holds no markdown pages.
    Empty,
    /// Directory contributes a group.
    Group(NavGroup),
}

/// Scan result for one configured track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackScan {
    /// Track directory name as configured.
    pub track: String,
    /// What the scan found.
    pub state: TrackState,
}

/// Builds a [`Sidebar`] from an ordered list of track directories.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), sidenav_site::SidebarError> {
/// use sidenav_site::SidebarBuilder;
///
/// let builder = SidebarBuilder::new("site", ["01-foundations", "02-core-concepts"]);
/// let sidebar = builder.build()?;
/// for group in &sidebar.groups {
///     let _ = (&group.label, group.entries.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SidebarBuilder {
    root: PathBuf,
    tracks: Vec<String>,
}

impl SidebarBuilder {
    /// Create a builder for `tracks`, resolved against `root`.
    pub fn new<I, S>(root: impl Into<PathBuf>, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            tracks: tracks.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the sidebar.
    ///
    /// Missing and empty tracks are omitted. Group order follows the
    /// configured track order.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Io`] if an existing track cannot be listed.
    pub fn build(&self) -> Result<Sidebar, SidebarError> {
        let groups = self
            .scan()?
            .into_iter()
            .filter_map(|scan| match scan.state {
                TrackState::Group(group) => Some(group),
                TrackState::Missing | TrackState::Empty => None,
            })
            .collect();
        Ok(Sidebar { groups })
    }

    /// Scan every configured track, reporting what each one contributes.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Io`] if an existing track cannot be listed.
    pub fn scan(&self) -> Result<Vec<TrackScan>, SidebarError> {
        self.tracks
            .iter()
            .map(|track| {
                Ok(TrackScan {
                    track: track.clone(),
                    state: self.scan_track(track)?,
                })
            })
            .collect()
    }

    fn scan_track(&self, track: &str) -> Result<TrackState, SidebarError> {
        let dir = self.root.join(track);
        let Some(stems) = markdown_stems(&dir)? else {
            tracing::debug!(track, path = %dir.display(), "Track directory missing, skipping");
            return Ok(TrackState::Missing);
        };

        if stems.is_empty() {
            tracing::debug!(track, "Track has no markdown pages, skipping");
            return Ok(TrackState::Empty);
        }

        let entries: Vec<NavItem> = stems
            .iter()
            .map(|stem| NavItem {
                label: item_label(stem),
                link: format!("/{track}/{stem}"),
            })
            .collect();

        let label = group_label(track);
        if label.is_empty() {
            tracing::warn!(
                track,
                "Track name has no words after its first dash-delimited token; group label is empty"
            );
        }

        tracing::info!(track, pages = entries.len(), "Built sidebar group");
        Ok(TrackState::Group(NavGroup {
            label,
            collapsed: false,
            entries,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn add_page(root: &Path, track: &str, file: &str) {
        let dir = root.join(track);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), "# Page\n").unwrap();
    }

    #[test]
    fn test_single_page_group() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "03-deep-dives", "week-1-js-engine.md");

        let sidebar = SidebarBuilder::new(temp_dir.path(), ["03-deep-dives"])
            .build()
            .unwrap();

        assert_eq!(
            sidebar,
            Sidebar {
                groups: vec![NavGroup {
                    label: "Deep Dives".to_owned(),
                    collapsed: false,
                    entries: vec![NavItem {
                        label: "Week 1 Js Engine".to_owned(),
                        link: "/03-deep-dives/week-1-js-engine".to_owned(),
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_numeric_prefix_kept_in_link() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "04-build-engines", "1-how-js-executes.md");

        let sidebar = SidebarBuilder::new(temp_dir.path(), ["04-build-engines"])
            .build()
            .unwrap();

        let item = &sidebar.groups[0].entries[0];
        assert_eq!(item.label, "How Js Executes");
        assert_eq!(item.link, "/04-build-engines/1-how-js-executes");
    }

    #[test]
    fn test_groups_follow_configured_order() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "01-foundations", "scope.md");
        add_page(temp_dir.path(), "02-core-concepts", "closures.md");
        add_page(temp_dir.path(), "03-deep-dives", "gc.md");

        let sidebar = SidebarBuilder::new(
            temp_dir.path(),
            ["03-deep-dives", "01-foundations", "02-core-concepts"],
        )
        .build()
        .unwrap();

        let labels: Vec<_> = sidebar.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Deep Dives", "Foundations", "Core Concepts"]);
    }

    #[test]
    fn test_missing_and_empty_tracks_are_omitted() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "01-foundations", "scope.md");
        fs::create_dir(temp_dir.path().join("02-core-concepts")).unwrap();
        fs::write(temp_dir.path().join("02-core-concepts").join("logo.svg"), "").unwrap();
        add_page(temp_dir.path(), "04-build-engines", "1-how-js-executes.md");

        let builder = SidebarBuilder::new(
            temp_dir.path(),
            [
                "01-foundations",
                "02-core-concepts",
                "04-build-engines",
                "05-extras",
            ],
        );
        let sidebar = builder.build().unwrap();

        assert_eq!(sidebar.groups.len(), 2);
        assert_eq!(sidebar.groups[0].label, "Foundations");
        assert_eq!(sidebar.groups[1].label, "Build Engines");
        assert_eq!(sidebar.page_count(), 2);
    }

    #[test]
    fn test_scan_reports_track_states() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "01-foundations", "scope.md");
        fs::create_dir(temp_dir.path().join("02-core-concepts")).unwrap();

        let scans = SidebarBuilder::new(
            temp_dir.path(),
            ["01-foundations", "02-core-concepts", "05-extras"],
        )
        .scan()
        .unwrap();

        assert_eq!(scans.len(), 3);
        assert!(matches!(scans[0].state, TrackState::Group(_)));
        assert_eq!(scans[1].state, TrackState::Empty);
        assert_eq!(scans[2].track, "05-extras");
        assert_eq!(scans[2].state, TrackState::Missing);
    }

    #[test]
    fn test_every_page_in_group() {
        let temp_dir = create_test_dir();
        for file in ["1-intro.md", "2-setup.md", "appendix-a.md"] {
            add_page(temp_dir.path(), "01-foundations", file);
        }

        let sidebar = SidebarBuilder::new(temp_dir.path(), ["01-foundations"])
            .build()
            .unwrap();

        let mut pairs: Vec<_> = sidebar.groups[0]
            .entries
            .iter()
            .map(|i| (i.label.as_str(), i.link.as_str()))
            .collect();
        pairs.sort_unstable();
        assert_eq!(
            pairs,
            vec![
                ("Appendix A", "/01-foundations/appendix-a"),
                ("Intro", "/01-foundations/1-intro"),
                ("Setup", "/01-foundations/2-setup"),
            ]
        );
        for item in &sidebar.groups[0].entries {
            assert!(!item.label.contains('-'));
            assert!(!item.label.contains(".md"));
        }
    }

    #[test]
    fn test_dotfile_pages_are_listed() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "01-foundations", ".intro.md");
        add_page(temp_dir.path(), "01-foundations", "guide.md");

        let sidebar = SidebarBuilder::new(temp_dir.path(), ["01-foundations"])
            .build()
            .unwrap();

        let mut links: Vec<_> = sidebar.groups[0]
            .entries
            .iter()
            .map(|i| i.link.as_str())
            .collect();
        links.sort_unstable();
        assert_eq!(links, vec!["/01-foundations/.intro", "/01-foundations/guide"]);
    }

    #[test]
    fn test_unprefixed_track_label_quirk() {
        let temp_dir = create_test_dir();
        add_page(temp_dir.path(), "deep-dives", "gc.md");

        let sidebar = SidebarBuilder::new(temp_dir.path(), ["deep-dives"])
            .build()
            .unwrap();

        assert_eq!(sidebar.groups[0].label, "Dives");
    }

    #[test]
    fn test_no_tracks_yields_empty_sidebar() {
        let temp_dir = create_test_dir();
        let sidebar = SidebarBuilder::new(temp_dir.path(), Vec::<String>::new())
            .build()
            .unwrap();
        assert_eq!(sidebar, Sidebar::default());
    }

    #[test]
    fn test_track_that_is_a_file_fails() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("01-foundations"), "oops").unwrap();

        let result = SidebarBuilder::new(temp_dir.path(), ["01-foundations"]).build();

        assert!(matches!(result, Err(SidebarError::Io { .. })));
    }

    #[test]
    fn test_serializes_theme_shape() {
        let sidebar = Sidebar {
            groups: vec![NavGroup {
                label: "Deep Dives".to_owned(),
                collapsed: false,
                entries: vec![NavItem {
                    label: "Week 1 Js Engine".to_owned(),
                    link: "/03-deep-dives/week-1-js-engine".to_owned(),
                }],
            }],
        };

        let json = serde_json::to_value(&sidebar).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "text": "Deep Dives",
                "collapsed": false,
                "items": [{
                    "text": "Week 1 Js Engine",
                    "link": "/03-deep-dives/week-1-js-engine"
                }]
            }])
        );
    }
}
