//! Shared numeric helpers.

use chrono::Timelike;

use super::constants::HOURS_PER_DAY;

/// Convert degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Clamp a value into the unit interval.
///
/// NaN is passed through unchanged; callers validate their inputs first.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between `start` and `end`.
///
/// # Arguments
/// * `start` - Value at factor 0.0
/// * `end` - Value at factor 1.0
/// * `factor` - Progress, clamped to 0.0-1.0
pub fn interpolate_f64(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * clamp_unit(factor)
}

/// Progress of `value` through `[start, end)`, clamped to 0.0-1.0.
///
/// Zero-width or inverted ranges report 0.0 instead of dividing by zero.
pub fn progress_between(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return 0.0;
    }
    clamp_unit((value - start) / span)
}

/// Wrap any finite hour value into `[0, 24)`.
pub fn normalize_hour(hour: f64) -> f64 {
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to exactly 24.0 for tiny negative inputs
    if wrapped >= HOURS_PER_DAY { 0.0 } else { wrapped }
}

/// Hour of day with minutes as a fraction, e.g. 13:45 -> 13.75.
///
/// Seconds are ignored so that a sky evaluated once per minute is stable for
/// the whole minute.
pub fn hour_with_minutes<T: Timelike>(time: &T) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

/// Format a fractional hour as `HH:MM`.
pub fn format_hour(hour: f64) -> String {
    let total_minutes = (normalize_hour(hour) * 60.0).round() as u32 % (24 * 60);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_degree_radian_conversion() {
        let radians = degrees_to_radians(180.0);
        assert!((radians - std::f64::consts::PI).abs() < 0.001);
        assert!((radians_to_degrees(radians) - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_interpolate_clamps_factor() {
        assert_eq!(interpolate_f64(0.0, 10.0, 0.5), 5.0);
        assert_eq!(interpolate_f64(0.0, 10.0, -1.0), 0.0);
        assert_eq!(interpolate_f64(0.0, 10.0, 2.0), 10.0);
    }

    #[test]
    fn test_progress_between_degenerate_ranges() {
        assert_eq!(progress_between(5.0, 5.0, 5.0), 0.0);
        assert_eq!(progress_between(5.0, 6.0, 4.0), 0.0);
        assert_eq!(progress_between(5.0, 4.0, 6.0), 0.5);
    }

    #[test]
    fn test_normalize_hour_wraps() {
        assert_eq!(normalize_hour(24.0), 0.0);
        assert_eq!(normalize_hour(25.5), 1.5);
        assert_eq!(normalize_hour(-1.0), 23.0);
        assert_eq!(normalize_hour(-1e-18), 0.0);
        assert!(normalize_hour(-1e-18) < HOURS_PER_DAY);
    }

    #[test]
    fn test_hour_with_minutes_ignores_seconds() {
        let time = NaiveTime::from_hms_opt(13, 45, 59).unwrap();
        assert_eq!(hour_with_minutes(&time), 13.75);
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(6.5), "06:30");
        assert_eq!(format_hour(23.999), "00:00");
        assert_eq!(format_hour(0.0), "00:00");
    }
}
