//! Configuration loading functionality.
//!
//! Handles locating the configuration file, applying defaults, and merging
//! geo.toml overrides.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::validation::validate_config;
use super::{Config, GeoConfig};
use crate::common::constants::*;

/// Get the configuration file path.
///
/// `config_dir` replaces the default `$XDG_CONFIG_HOME/skycolor` directory.
pub fn get_config_path(config_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = config_dir {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Path of the geo.toml that sits next to `config_path`.
pub fn get_geo_path(config_path: &Path) -> Option<PathBuf> {
    config_path.parent().map(|dir| dir.join(GEO_FILE_NAME))
}

/// Load configuration using automatic path detection.
///
/// A missing file is not an error: defaults are used, and a geo.toml in the
/// same directory still applies.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let config_path = get_config_path(config_dir)?;

    if config_path.exists() {
        return load_from_path(&config_path);
    }

    let mut config = Config::default();
    load_geo_override_from_path(&mut config, &config_path)?;
    validate_config(&config)?;
    apply_defaults(&mut config);
    Ok(config)
}

/// Load configuration from a specific path, which must exist.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    // geo.toml is merged before validation so its values are validated too
    load_geo_override_from_path(&mut config, path)?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    apply_defaults(&mut config);

    Ok(config)
}

/// Apply default values to configuration fields.
///
/// Location is left unset: no coordinate means the caller's default location.
fn apply_defaults(config: &mut Config) {
    if config.default_sunrise.is_none() {
        config.default_sunrise = Some(DEFAULT_SUNRISE_HOUR);
    }
    if config.default_sunset.is_none() {
        config.default_sunset = Some(DEFAULT_SUNSET_HOUR);
    }
    if config.update_interval.is_none() {
        config.update_interval = Some(DEFAULT_UPDATE_INTERVAL);
    }
}

/// Load geo.toml from the directory of `config_path`.
pub(crate) fn load_geo_override_from_path(config: &mut Config, config_path: &Path) -> Result<()> {
    let Some(geo_path) = get_geo_path(config_path) else {
        return Ok(());
    };

    if !geo_path.exists() {
        // geo.toml is optional, no error if missing
        return Ok(());
    }

    match fs::read_to_string(&geo_path) {
        Ok(content) => match toml::from_str::<GeoConfig>(&content) {
            Ok(geo_config) => {
                if let Some(lat) = geo_config.latitude {
                    config.latitude = Some(lat);
                }
                if let Some(lon) = geo_config.longitude {
                    config.longitude = Some(lon);
                }
            }
            Err(e) => {
                log_warning!("Failed to parse geo.toml: {e}. Using coordinates from main config.");
            }
        },
        Err(e) => {
            log_warning!("Failed to read geo.toml: {e}. Using coordinates from main config.");
        }
    }

    Ok(())
}
