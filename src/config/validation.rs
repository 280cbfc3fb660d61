//! Configuration validation functionality.
//!
//! Rejects values the engines would refuse later, so that mistakes surface
//! with the field name attached instead of as a bare input error.

use anyhow::Result;

use super::Config;
use crate::common::constants::*;

/// Validate every configured field.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_location(config)?;

    if let Some(hours) = config.utc_offset_hours
        && (!hours.is_finite()
            || !(MINIMUM_UTC_OFFSET_HOURS..=MAXIMUM_UTC_OFFSET_HOURS).contains(&hours))
    {
        anyhow::bail!(
            "utc_offset_hours ({}) must be between {} and {}",
            hours,
            MINIMUM_UTC_OFFSET_HOURS,
            MAXIMUM_UTC_OFFSET_HOURS
        );
    }

    let sunrise = config.default_sunrise.unwrap_or(DEFAULT_SUNRISE_HOUR);
    let sunset = config.default_sunset.unwrap_or(DEFAULT_SUNSET_HOUR);
    validate_fallback_hour(sunrise, "default_sunrise")?;
    validate_fallback_hour(sunset, "default_sunset")?;

    if sunrise >= sunset {
        anyhow::bail!(
            "default_sunrise ({}) must be earlier than default_sunset ({})",
            sunrise,
            sunset
        );
    }

    if let Some(interval) = config.update_interval
        && !(MINIMUM_UPDATE_INTERVAL..=MAXIMUM_UPDATE_INTERVAL).contains(&interval)
    {
        anyhow::bail!(
            "update_interval ({} seconds) must be between {} and {} seconds",
            interval,
            MINIMUM_UPDATE_INTERVAL,
            MAXIMUM_UPDATE_INTERVAL
        );
    }

    Ok(())
}

fn validate_location(config: &Config) -> Result<()> {
    match (config.latitude, config.longitude) {
        (Some(_), None) => anyhow::bail!("latitude is set but longitude is missing"),
        (None, Some(_)) => anyhow::bail!("longitude is set but latitude is missing"),
        _ => {}
    }

    if let Some(lat) = config.latitude
        && (!lat.is_finite() || !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat))
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && (!lon.is_finite() || !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon))
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    Ok(())
}

fn validate_fallback_hour(hour: f64, field: &str) -> Result<()> {
    if !hour.is_finite() || !(0.0..HOURS_PER_DAY).contains(&hour) {
        anyhow::bail!("{} ({}) must be an hour between 0 and 24", field, hour);
    }
    Ok(())
}
