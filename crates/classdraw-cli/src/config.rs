//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use classdraw::{ClassdrawError, config::AppConfig};

/// Local project configuration path, relative to the working directory.
const LOCAL_CONFIG: &str = "classdraw/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ClassdrawError {
    fn from(err: ConfigError) -> Self {
        ClassdrawError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (classdraw/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ClassdrawError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    match discover_config() {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading discovered configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Returns the first existing configuration file among the implicit locations.
fn discover_config() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }

    let Some(proj_dirs) = ProjectDirs::from("com", "classdraw", "classdraw") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };
    let system = proj_dirs.config_dir().join("config.toml");
    if system.exists() {
        return Some(system);
    }

    debug!(path = system.display().to_string(); "System configuration file not found");
    None
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file is missing, unreadable, or not valid TOML.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ClassdrawError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    Ok(config)
}
