//! Configuration management for sidenav.
//!
//! Parses `sidenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base`
//! - `site.title`
//! - `site.description`

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidenav.toml";

/// Content tracks used when the config file does not list any.
///
/// Order here is the order of groups in the sidebar.
pub const DEFAULT_TRACKS: &[&str] = &[
    "01-foundations",
    "02-core-concepts",
    "03-deep-dives",
    "04-build-engines",
    "05-extras",
];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site root directory.
    pub root: Option<PathBuf>,
    /// Override site base path.
    pub base: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (root is a relative string from TOML).
    site: SiteConfigRaw,
    /// Sidebar configuration.
    pub sidebar: SidebarConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSettings,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    root: Option<String>,
    base: Option<String>,
    title: Option<String>,
    description: Option<String>,
    lang: Option<String>,
}

/// Resolved site settings with an absolute content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Directory the track directories are resolved against.
    pub root: PathBuf,
    /// Public base path the site is served under (e.g. `/` or `/handbook/`).
    pub base: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Site language tag.
    pub lang: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base: "/".to_owned(),
            title: "Documentation".to_owned(),
            description: String::new(),
            lang: "en-US".to_owned(),
        }
    }
}

/// Sidebar configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarConfig {
    /// Ordered list of track directory names, relative to the site root.
    pub tracks: Vec<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            tracks: DEFAULT_TRACKS.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a base path of the form `/` or `/segment/.../`.
fn require_base_path(base: &str, field: &str) -> Result<(), ConfigError> {
    if !base.starts_with('/') || !base.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start and end with '/' (got {base:?})"
        )));
    }
    Ok(())
}

/// Require a track to be a single, plain directory name.
fn require_track_name(track: &str) -> Result<(), ConfigError> {
    require_non_empty(track, "sidebar.tracks entry")?;
    let mut components = Path::new(track).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !track.contains(['/', '\\']) => Ok(()),
        _ => Err(ConfigError::Validation(format!(
            "sidebar.tracks entry {track:?} must be a single directory name"
        ))),
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root) = &settings.root {
            self.site_resolved.root.clone_from(root);
        }
        if let Some(base) = &settings.base {
            self.site_resolved.base.clone_from(base);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its ancestors.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            sidebar: SidebarConfig::default(),
            site_resolved: SiteSettings {
                root: base.to_path_buf(),
                ..SiteSettings::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_sidebar()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.title, "site.title")?;
        require_non_empty(&self.site_resolved.lang, "site.lang")?;
        require_base_path(&self.site_resolved.base, "site.base")?;
        Ok(())
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for track in &self.sidebar.tracks {
            require_track_name(track)?;
        }
        if let Some(dup) = self
            .sidebar
            .tracks
            .iter()
            .enumerate()
            .find_map(|(i, t)| self.sidebar.tracks[..i].contains(t).then_some(t))
        {
            return Err(ConfigError::Validation(format!(
                "sidebar.tracks lists {dup:?} more than once"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base) = self.site.base {
            self.site.base = Some(expand::expand_env(base, "site.base")?);
        }
        if let Some(ref title) = self.site.title {
            self.site.title = Some(expand::expand_env(title, "site.title")?);
        }
        if let Some(ref description) = self.site.description {
            self.site.description = Some(expand::expand_env(description, "site.description")?);
        }
        Ok(())
    }

    /// Resolve raw values against the config directory and fill in defaults.
    fn resolve(&mut self, config_dir: &Path) {
        let defaults = SiteSettings::default();
        let raw = &self.site;
        self.site_resolved = SiteSettings {
            root: config_dir.join(raw.root.as_deref().unwrap_or(".")),
            base: raw.base.clone().unwrap_or(defaults.base),
            title: raw.title.clone().unwrap_or(defaults.title),
            description: raw.description.clone().unwrap_or(defaults.description),
            lang: raw.lang.clone().unwrap_or(defaults.lang),
        };
    }
}
