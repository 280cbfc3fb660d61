//! Display and formatting utilities for geo module.
//!
//! Solar results are printed through the box-drawing logger, with both the
//! astronomical events and the derived sky anchors so users can see exactly
//! where the gradient keyframes fall on their clock.

use chrono::{FixedOffset, NaiveDate};

use super::{GeoCoordinate, SolarCalculator, SolarHours};
use crate::common::utils::format_hour;
use crate::sky::SunHours;

/// Format an optional event hour, spelling out the polar case.
pub fn format_event(hour: Option<f64>, missing: &str) -> String {
    match hour {
        Some(hour) => format_hour(hour),
        None => missing.to_string(),
    }
}

/// Format a UTC offset as `+02:00`.
pub fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.abs();
    format!("{sign}{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}

/// Log the sunrise/sunset summary for a coordinate and day.
///
/// Shows the raw astronomical events, the fallback hours actually used when an
/// event is missing, and the dawn/dusk anchors derived from them.
pub fn log_solar_summary(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    offset: FixedOffset,
    hours: &SolarHours,
    sun: &SunHours,
) {
    log_block_start!("Solar times for {}", coordinate.display());
    log_indented!("Date: {} (UTC{})", date.format("%Y-%m-%d"), format_offset(offset));
    log_indented!("Sunrise: {}", format_event(hours.sunrise, "none (sun stays up or down)"));
    log_indented!("Sunset: {}", format_event(hours.sunset, "none (sun stays up or down)"));

    if let Some(length) = hours.day_length() {
        let minutes = (length * 60.0).round() as u32;
        log_indented!("Day length: {}h {:02}m", minutes / 60, minutes % 60);
    }

    if hours.is_polar() {
        log_pipe!();
        log_warning!("Polar conditions: using fallback hours for missing events");
        log_indented!(
            "Sunrise {} / Sunset {}",
            format_hour(sun.sunrise()),
            format_hour(sun.sunset())
        );
    }

    log_block_start!("Sky anchors");
    log_indented!("Dawn: {}", format_hour(sun.dawn()));
    log_indented!("Sunrise: {}", format_hour(sun.sunrise()));
    log_indented!("Sunset: {}", format_hour(sun.sunset()));
    log_indented!("Dusk: {}", format_hour(sun.dusk()));
}

/// Log detailed solar calculation diagnostics (debug mode).
pub fn log_solar_debug_info(coordinate: GeoCoordinate, date: NaiveDate, offset: FixedOffset) {
    use chrono::{Datelike, Offset, Utc};

    let calculator = SolarCalculator::new(coordinate);
    let utc_hours = calculator.hours(date, Utc.fix());

    log_pipe!();
    log_debug!("Solar calculation details:");
    log_indented!(
        "        Raw coordinates: {:.4}°, {:.4}°",
        coordinate.latitude(),
        coordinate.longitude()
    );
    log_indented!("            Day of year: {}", date.ordinal());
    log_indented!("            Sunrise UTC: {}", format_event(utc_hours.sunrise, "none"));
    log_indented!("             Sunset UTC: {}", format_event(utc_hours.sunset, "none"));
    log_indented!("           Clock offset: UTC{}", format_offset(offset));
}
