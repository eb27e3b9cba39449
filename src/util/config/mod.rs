//! BrainPlus configuration files
//!
//! Supports user-level and project-level configuration with merge semantics.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Project-level (brainplus.toml next to the entry file)
//! 3. User-level (~/.config/brainplus/config.toml)
//! 4. Default values
//! ```
//!
//! # Example
//!
//! ```toml
//! [compile]
//! include_paths = ["lib"]
//! max_include_depth = 16
//! max_nesting_depth = 256
//!
//! [log]
//! level = "debug"
//! ```

use crate::frontend::config::CompileConfig;
use crate::util::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "brainplus.toml";

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// `[compile]` table
    #[serde(default)]
    pub compile: CompileConfig,
    /// `[log]` table
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level; unset keeps the caller's default
    #[serde(default)]
    pub level: Option<LogLevel>,
}

impl FileConfig {
    /// Layer `other` on top of `self`
    pub fn merge(
        self,
        other: FileConfig,
    ) -> Self {
        Self {
            compile: self.compile.merge(other.compile),
            log: LogConfig {
                level: other.log.level.or(self.log.level),
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("brainplus"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("brainplus"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("brainplus"));
    }

    None
}

/// Get the user config file path (~/.config/brainplus/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Project config path for an entry file: `brainplus.toml` in its directory
pub fn project_config_path(entry: &Path) -> PathBuf {
    entry
        .parent()
        .unwrap_or(Path::new(""))
        .join(PROJECT_CONFIG_FILE)
}

/// Load one configuration file
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse configuration text
pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<FileConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.is_file() => load_file(&path),
        _ => Ok(FileConfig::default()),
    }
}

/// Resolve the effective configuration for compiling `entry`
///
/// An explicit file replaces the project-level lookup; the user-level file
/// is always the base layer.
pub fn load_for_entry(
    entry: &Path,
    explicit: Option<&Path>,
) -> Result<FileConfig, ConfigError> {
    let user = load_user_config()?;
    let project = match explicit {
        Some(path) => load_file(path)?,
        None => {
            let path = project_config_path(entry);
            if path.is_file() {
                tracing::debug!("using project config {}", path.display());
                load_file(&path)?
            } else {
                FileConfig::default()
            }
        }
    };
    Ok(user.merge(project))
}
