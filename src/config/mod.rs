//! Configuration system for skycolor.
//!
//! Settings are read from `skycolor.toml`, located in
//! `$XDG_CONFIG_HOME/skycolor/` or in a directory given with `--config`.
//! The file is optional and never written: without it every value falls back
//! to its default.
//!
//! ```toml
//! #[Location]
//! latitude = 48.8566        # Observer latitude (-90 to 90), Paris when unset
//! longitude = 2.3522        # Observer longitude (-180 to 180), east positive
//!
//! #[Clock]
//! utc_offset_hours = 2.0    # Fixed clock offset (-12 to 14), system offset when unset
//!
//! #[Fallbacks]
//! default_sunrise = 6.0     # Hour used when the sun does not rise (0-24)
//! default_sunset = 20.0     # Hour used when the sun does not set (0-24)
//!
//! #[Watch]
//! update_interval = 60      # Seconds between evaluations in watch mode (10-3600)
//! ```
//!
//! An optional `geo.toml` next to the main file can hold `latitude` and
//! `longitude` so the location stays out of a shared config. Its values
//! override the main file.

pub mod loading;
pub mod validation;

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::FixedOffset;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::common::constants::*;
use crate::geo::GeoCoordinate;
use crate::geo::solar::fixed_offset;
use crate::sky::SunHours;

pub use loading::{get_config_path, get_geo_path, load, load_from_path};

/// Geographic configuration structure for storing coordinates separately.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GeoConfig {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
}

/// Settings loaded from `skycolor.toml`.
///
/// Every field is optional in the file; [`load`] fills the defaults in so
/// that callers can rely on the accessors below.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub utc_offset_hours: Option<f64>,
    pub default_sunrise: Option<f64>,
    pub default_sunset: Option<f64>,
    pub update_interval: Option<u64>, // seconds
}

impl Config {
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        load(config_dir)
    }

    /// Configured observer position, if both coordinates are set.
    pub fn coordinate(&self) -> Result<Option<GeoCoordinate>> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                Ok(Some(GeoCoordinate::new(latitude, longitude)?))
            }
            _ => Ok(None),
        }
    }

    /// Fallback sunrise/sunset for days without those events.
    pub fn sun_fallback(&self) -> Result<SunHours> {
        SunHours::new(
            self.default_sunrise.unwrap_or(DEFAULT_SUNRISE_HOUR),
            self.default_sunset.unwrap_or(DEFAULT_SUNSET_HOUR),
        )
    }

    /// Fixed clock offset, or `None` to follow the system offset.
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset_hours
            .map(|hours| fixed_offset((hours * 3600.0).round() as i32))
            .transpose()
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval.unwrap_or(DEFAULT_UPDATE_INTERVAL))
    }

    /// Log the effective configuration.
    pub fn log_config(&self, source: Option<&Path>) {
        match source {
            Some(path) => log_block_start!("Loaded configuration from {}", path.display()),
            None => log_block_start!("No configuration file, using defaults"),
        }

        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => match GeoCoordinate::new(latitude, longitude) {
                Ok(coordinate) => log_indented!("Location: {}", coordinate.display()),
                Err(_) => log_indented!("Location: {latitude}, {longitude}"),
            },
            _ => log_indented!("Location: {} (default)", GeoCoordinate::paris().display()),
        }

        match self.utc_offset_hours {
            Some(hours) => log_indented!("Clock: UTC{:+}", hours),
            None => log_indented!("Clock: system local time"),
        }

        log_indented!(
            "Fallback sunrise/sunset: {} / {}",
            crate::common::utils::format_hour(
                self.default_sunrise.unwrap_or(DEFAULT_SUNRISE_HOUR)
            ),
            crate::common::utils::format_hour(self.default_sunset.unwrap_or(DEFAULT_SUNSET_HOUR))
        );
        log_indented!(
            "Update interval: {} seconds",
            self.update_interval.unwrap_or(DEFAULT_UPDATE_INTERVAL)
        );
    }
}
