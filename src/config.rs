use crate::error::ConfigError;
use crate::snapshot::PageField;

use serde::Deserialize;
use std::path::Path;

/// Settings for route discovery and page snapshots.
///
/// Every field has a default, so an empty document is a valid configuration:
///
/// ```rust
/// use crumbtrail::{Config, PageField};
///
/// let config = Config::from_toml_str(r#"
///     routes_root = "/app/routes"
///     include = ["status"]
/// "#).unwrap();
///
/// assert_eq!(config.routes_root, "/app/routes");
/// assert_eq!(config.page_stem, "+page");
/// assert_eq!(config.include, [PageField::Status]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix stripped from module paths when deriving route patterns.
    pub routes_root: String,
    /// File stem of a route module, e.g. `+page` for `+page.svelte`.
    pub page_stem: String,
    /// Optional page fields captured in every snapshot.
    pub include: Vec<PageField>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            routes_root: String::from("/src/routes"),
            page_stem: String::from("+page"),
            include: Vec::new(),
        }
    }
}

impl Config {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&source)
    }
}
