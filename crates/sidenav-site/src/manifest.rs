//! Site manifest handed to the static site generator.

use serde::Serialize;
use sidenav_config::SiteSettings;

use crate::sidebar::Sidebar;

/// Theme-level settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Generated sidebar.
    pub sidebar: Sidebar,
}

/// Site-level configuration object, serialized as JSON for the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    /// Site title.
    pub title: String,
    /// Site description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Base path the site is served under.
    pub base: String,
    /// Language tag.
    pub lang: String,
    /// Theme configuration.
    pub theme_config: ThemeConfig,
}

impl SiteManifest {
    /// Combine site settings with a generated sidebar.
    pub fn new(settings: &SiteSettings, sidebar: Sidebar) -> Self {
        Self {
            title: settings.title.clone(),
            description: settings.description.clone(),
            base: settings.base.clone(),
            lang: settings.lang.clone(),
            theme_config: ThemeConfig { sidebar },
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error (not expected for this type).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::{NavGroup, NavItem};
    use pretty_assertions::assert_eq;

    fn sample_sidebar() -> Sidebar {
        Sidebar {
            groups: vec![NavGroup {
                label: "Build Engines".to_owned(),
                collapsed: false,
                entries: vec![NavItem {
                    label: "How Js Executes".to_owned(),
                    link: "/04-build-engines/1-how-js-executes".to_owned(),
                }],
            }],
        }
    }

    #[test]
    fn test_manifest_json_shape() {
        let settings = SiteSettings {
            base: "/handbook/".to_owned(),
            title: "Engine Handbook".to_owned(),
            description: "Notes".to_owned(),
            ..SiteSettings::default()
        };

        let manifest = SiteManifest::new(&settings, sample_sidebar());
        let json: serde_json::Value =
            serde_json::from_str(&manifest.to_json_pretty().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Engine Handbook",
                "description": "Notes",
                "base": "/handbook/",
                "lang": "en-US",
                "themeConfig": {
                    "sidebar": [{
                        "text": "Build Engines",
                        "collapsed": false,
                        "items": [{
                            "text": "How Js Executes",
                            "link": "/04-build-engines/1-how-js-executes"
                        }]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_empty_description_omitted() {
        let manifest = SiteManifest::new(&SiteSettings::default(), Sidebar::default());
        let json = serde_json::to_value(&manifest).unwrap();

        assert!(json.get("description").is_none());
        assert_eq!(json["themeConfig"]["sidebar"], serde_json::json!([]));
    }
}
