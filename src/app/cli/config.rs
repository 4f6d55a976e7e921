//! TOML configuration file loading
//!
//! The file names the directories to search and may carry defaults for the
//! logging and output options. Command-line values always win.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app::error::{AppError, AppResult};

/// Name of the configuration file looked up by default
pub const CONFIG_FILE_NAME: &str = "git-log-searcher.toml";

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directories to search, in output order
    pub directories: Vec<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
    pub width: Option<u16>,
}

impl Config {
    /// Find and load the configuration file
    ///
    /// An explicit path must exist. Otherwise `./git-log-searcher.toml` is tried, then
    /// the same name under the user's config directory.
    pub async fn load(explicit: Option<&Path>) -> AppResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::discover()?,
        };
        log::debug!("Loading configuration from {}", path.display());

        let contents =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| AppError::ConfigRead {
                    path: path.clone(),
                    source,
                })?;

        let mut config = Self::parse(&contents).map_err(|source| AppError::ConfigParse {
            path: path.clone(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.directories = config
            .directories
            .iter()
            .map(|dir| resolve_directory(dir, base))
            .collect();

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Default locations, in lookup order
    pub fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("git-log-searcher").join(CONFIG_FILE_NAME));
        }
        locations
    }

    fn discover() -> AppResult<PathBuf> {
        let searched = Self::default_locations();
        let found = searched.iter().find(|path| path.is_file()).cloned();
        found.ok_or(AppError::ConfigNotFound { searched })
    }

    /// Log file from config; "none" and "-" disable file logging
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().filter(|p| !is_disabled_log_file(p))
    }
}

/// Magic values that switch file logging off
pub fn is_disabled_log_file(path: &Path) -> bool {
    path.to_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("none") || s == "-")
}

/// Expand `~/` and anchor relative paths at the config file's directory
fn resolve_directory(directory: &Path, base: &Path) -> PathBuf {
    if let Ok(rest) = directory.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if directory.is_relative() {
        base.join(directory)
    } else {
        directory.to_path_buf()
    }
}
