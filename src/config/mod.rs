//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Records per category shown before "reveal more"
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Default directory document to load when no path is given
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            data_path: None,
            display: DisplayConfig::default(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Whether to colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Maximum width of the description column before truncation
    #[serde(default = "default_description_width")]
    pub max_description_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            max_description_width: default_description_width(),
        }
    }
}

fn default_page_size() -> usize {
    crate::directory::DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

fn default_description_width() -> usize {
    60
}

/// Load configuration from a file, with `PUBDIR_*` environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PUBDIR"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the usual places
///
/// Probes `./pubdir.toml` first, then `<config dir>/pubdir/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("pubdir.toml");
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("pubdir").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Get the default configuration
pub fn get_config() -> Config {
    Config::default()
}
