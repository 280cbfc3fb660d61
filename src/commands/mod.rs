//! Command-line command handlers for skycolor.
//!
//! Each command lives in its own submodule. They share a [`CommandContext`]
//! holding the loaded configuration and the resolved location, so that
//! every command agrees on where and on which clock it is evaluating.

pub mod help;
pub mod now;
pub mod simulate;
pub mod sun;
pub mod watch;

use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::CommonOptions;
use crate::common::logger::Log;
use crate::config::{self, Config};
use crate::geo::{FixedLocation, GeoCoordinate, resolve_location};
use crate::sky::SunHours;
use crate::time_source::RealTimeSource;

/// Configuration and location shared by all commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub coordinate: GeoCoordinate,
    pub fallback: SunHours,
    /// Fixed clock offset from the config; `None` follows the system clock
    pub offset: Option<FixedOffset>,
    pub debug_enabled: bool,
    pub json: bool,
    config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load the configuration named by `options` and resolve the location.
    ///
    /// With `--json` the decorated log is switched off so that stdout carries
    /// only the JSON document.
    pub fn load(options: &CommonOptions) -> Result<Self> {
        if options.json {
            Log::set_enabled(false);
        }

        let config_dir = options.config_dir.as_deref().map(PathBuf::from);
        let config_path = config::get_config_path(config_dir.as_deref())?;
        let config = Config::load(config_dir.as_deref()).context("Failed to load configuration")?;
        let source = config_path.exists().then_some(config_path);

        Self::from_config(config, options, source)
    }

    /// Build a context from an already loaded configuration.
    pub fn from_config(
        config: Config,
        options: &CommonOptions,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        let provider = FixedLocation(config.coordinate()?);
        let coordinate = resolve_location(&provider);
        let fallback = config.sun_fallback()?;
        let offset = config.utc_offset()?;

        Ok(Self {
            config,
            coordinate,
            fallback,
            offset,
            debug_enabled: options.debug_enabled,
            json: options.json,
            config_path,
        })
    }

    /// The clock commands read "now" from.
    pub fn time_source(&self) -> RealTimeSource {
        match self.offset {
            Some(offset) => RealTimeSource::with_offset(offset),
            None => RealTimeSource::local(),
        }
    }

    /// Version header and configuration summary.
    pub fn log_header(&self) {
        log_version!();
        self.config.log_config(self.config_path.as_deref());
        if self.config.coordinate().ok().flatten().is_none() {
            log_pipe!();
            log_info!("No location configured, using {}", self.coordinate.display());
        }
        if self.debug_enabled {
            log_pipe!();
            log_debug!("Debug mode enabled - showing solar calculation details");
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults_to_paris() {
        let context =
            CommandContext::from_config(Config::default(), &CommonOptions::default(), None)
                .unwrap();
        assert_eq!(context.coordinate, GeoCoordinate::paris());
        assert_eq!(context.fallback, SunHours::default());
        assert_eq!(context.offset, None);
    }

    #[test]
    fn test_context_uses_configured_location_and_offset() {
        let config = Config {
            latitude: Some(35.6762),
            longitude: Some(139.6503),
            utc_offset_hours: Some(9.0),
            ..Default::default()
        };
        let context =
            CommandContext::from_config(config, &CommonOptions::default(), None).unwrap();

        assert_eq!(context.coordinate.latitude(), 35.6762);
        assert_eq!(
            context.offset.map(|offset| offset.local_minus_utc()),
            Some(9 * 3600)
        );
    }
}
