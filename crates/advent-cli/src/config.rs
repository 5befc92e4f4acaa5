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

use advent::{AdventError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for AdventError {
    fn from(err: ConfigError) -> Self {
        AdventError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (advent/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, AdventError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("advent/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "advent", "advent") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Check rule values that would make every answer meaningless.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] naming the first bad setting.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let dial = config.dial;
    if dial.size() == 0 || dial.start() >= dial.size() {
        return Err(ConfigError::Validation(format!(
            "dial.start must be below dial.size, got start {} and size {}",
            dial.start(),
            dial.size()
        )));
    }
    if config.lobby.part_one_batteries == 0 || config.lobby.part_two_batteries == 0 {
        return Err(ConfigError::Validation(
            "lobby battery counts must be at least 1".to_string(),
        ));
    }
    if config.playground.largest() == 0 {
        return Err(ConfigError::Validation(
            "playground.largest must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, AdventError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use advent::config::{DialSpec, LobbyConfig, WiringPlan};
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[printing]\ncrowded_threshold = 5").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.printing.crowded_threshold(), 5);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();

        assert!(matches!(err, AdventError::Config(_)));
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[dial]\nsize = \"big\"").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_validate() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_dial_start() {
        let mut config = AppConfig::default();
        config.dial = DialSpec::new(100, 100);

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("start 100 and size 100"));

        config.dial = DialSpec::new(0, 0);
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_playground_largest() {
        let mut config = AppConfig::default();
        config.playground = WiringPlan::default().with_largest(0);

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("playground.largest"));
    }

    #[test]
    fn test_validate_lobby_batteries() {
        let mut config = AppConfig::default();
        config.lobby = LobbyConfig {
            part_one_batteries: 0,
            ..LobbyConfig::default()
        };
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }
}
