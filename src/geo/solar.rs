//! Sunrise and sunset approximation.
//!
//! This is the lightweight almanac algorithm (mean solar longitude, right
//! ascension, declination, hour angle) rather than a full ephemeris. It is
//! accurate to a few minutes at civil latitudes, which is far below what a
//! sky gradient can show, and it needs nothing but `f64` math.
//!
//! Results are hours-of-day on the caller's clock: the UTC offset supplied with
//! the date is applied verbatim, so daylight saving time is whatever the
//! caller says it is.
//!
//! When the sun stays above or below the horizon for the whole day, the
//! corresponding event is `None`. That is an expected outcome at high
//! latitudes, not an error.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;

use super::GeoCoordinate;
use crate::common::constants::{
    DECLINATION_FACTOR, HORIZON_CORRECTION_DEGREES, HOURS_PER_DAY, MEAN_LONGITUDE_AT_EPOCH,
    MEAN_LONGITUDE_RATE, RIGHT_ASCENSION_FACTOR, SIDEREAL_OFFSET, SIDEREAL_RATE,
    SUNRISE_APPROX_HOUR, SUNSET_APPROX_HOUR,
};
use crate::common::error::InvalidInput;
use crate::common::utils::{degrees_to_radians, normalize_hour, radians_to_degrees};

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Rough local time of the event used to estimate the sun's position.
    fn approximate_hour(self) -> f64 {
        match self {
            Self::Sunrise => SUNRISE_APPROX_HOUR,
            Self::Sunset => SUNSET_APPROX_HOUR,
        }
    }
}

/// Sunrise and sunset as fractional hours-of-day in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SolarHours {
    pub sunrise: Option<f64>,
    pub sunset: Option<f64>,
}

impl SolarHours {
    /// True when at least one event did not happen on this day.
    pub fn is_polar(&self) -> bool {
        self.sunrise.is_none() || self.sunset.is_none()
    }

    /// Hours between sunrise and sunset, wrapping past midnight if needed.
    pub fn day_length(&self) -> Option<f64> {
        match (self.sunrise, self.sunset) {
            (Some(rise), Some(set)) => Some((set - rise).rem_euclid(HOURS_PER_DAY)),
            _ => None,
        }
    }
}

/// Sunrise and sunset as instants on the evaluated date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTimes {
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
}

/// Sunrise/sunset calculator bound to one observer position.
#[derive(Debug, Clone, Copy)]
pub struct SolarCalculator {
    coordinate: GeoCoordinate,
}

impl SolarCalculator {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self { coordinate }
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// Local clock hour of `event` on `date`, or `None` in polar conditions.
    pub fn event_hour(&self, date: NaiveDate, offset: FixedOffset, event: SolarEvent) -> Option<f64> {
        let day_of_year = date.ordinal() as f64;
        let longitude_hours = self.coordinate.longitude() / 15.0;
        let t = day_of_year + (event.approximate_hour() - longitude_hours) / HOURS_PER_DAY;

        let mean_longitude = MEAN_LONGITUDE_AT_EPOCH + MEAN_LONGITUDE_RATE * t;

        // atan(k * tan(L)) kept in the quadrant of L
        let right_ascension =
            (RIGHT_ASCENSION_FACTOR * mean_longitude.sin()).atan2(mean_longitude.cos());
        let right_ascension_hours = radians_to_degrees(right_ascension).rem_euclid(360.0) / 15.0;
        let declination = (DECLINATION_FACTOR * mean_longitude.sin()).asin();

        let latitude = degrees_to_radians(self.coordinate.latitude());
        let cos_hour_angle = (degrees_to_radians(HORIZON_CORRECTION_DEGREES).sin()
            - latitude.sin() * declination.sin())
            / (latitude.cos() * declination.cos());

        // Sun never crosses the horizon today (also rejects NaN at the poles)
        if !(-1.0..=1.0).contains(&cos_hour_angle) {
            return None;
        }

        let hour_angle = match event {
            SolarEvent::Sunrise => 2.0 * std::f64::consts::PI - cos_hour_angle.acos(),
            SolarEvent::Sunset => cos_hour_angle.acos(),
        };

        let local_mean_time = radians_to_degrees(hour_angle) / 15.0 + right_ascension_hours
            - SIDEREAL_RATE * t
            - SIDEREAL_OFFSET;
        let universal_time = local_mean_time - longitude_hours;
        let offset_hours = offset.local_minus_utc() as f64 / 3600.0;

        Some(normalize_hour(universal_time + offset_hours))
    }

    /// Sunrise and sunset hours for `date` on a clock `offset` from UTC.
    pub fn hours(&self, date: NaiveDate, offset: FixedOffset) -> SolarHours {
        SolarHours {
            sunrise: self.event_hour(date, offset, SolarEvent::Sunrise),
            sunset: self.event_hour(date, offset, SolarEvent::Sunset),
        }
    }

    /// Sunrise and sunset instants for `date`, truncated to the second.
    pub fn compute(&self, date: NaiveDate, offset: FixedOffset) -> Result<SolarTimes> {
        let hours = self.hours(date, offset);
        Ok(SolarTimes {
            sunrise: hours
                .sunrise
                .map(|hour| instant_at(date, offset, hour))
                .transpose()
                .context("Failed to build sunrise instant")?,
            sunset: hours
                .sunset
                .map(|hour| instant_at(date, offset, hour))
                .transpose()
                .context("Failed to build sunset instant")?,
        })
    }

    /// Sunrise and sunset for the calendar day and offset of `instant`.
    pub fn compute_for(&self, instant: &DateTime<FixedOffset>) -> Result<SolarTimes> {
        self.compute(instant.date_naive(), *instant.offset())
    }
}

/// Combine a date with a fractional hour into an instant on `offset`.
fn instant_at(date: NaiveDate, offset: FixedOffset, hour: f64) -> Result<DateTime<FixedOffset>> {
    let seconds = ((normalize_hour(hour) * 3600.0).floor() as u32).min(86_399);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid time of day: {seconds} seconds"))?;
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| anyhow::anyhow!("Ambiguous local time {date} {time}"))
}

/// Validate a UTC offset given in seconds.
pub fn fixed_offset(utc_offset_seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(utc_offset_seconds)
        .ok_or_else(|| InvalidInput::UtcOffset(utc_offset_seconds).into())
}

/// Flat entry point: sunrise/sunset hours for a coordinate and calendar day.
///
/// # Arguments
/// * `latitude` - Degrees, -90 to 90
/// * `longitude` - Degrees, -180 to 180, east positive
/// * `year`, `month`, `day` - Calendar date on the caller's clock
/// * `utc_offset_seconds` - Offset of the caller's clock from UTC
///
/// # Errors
/// Returns [`InvalidInput`] for non-finite or out-of-range coordinates, an
/// impossible date, or an offset of a day or more. Polar days are not errors.
pub fn compute_solar_times(
    latitude: f64,
    longitude: f64,
    year: i32,
    month: u32,
    day: u32,
    utc_offset_seconds: i32,
) -> Result<SolarHours> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(InvalidInput::Date { year, month, day })?;
    let offset = fixed_offset(utc_offset_seconds)?;
    Ok(SolarCalculator::new(coordinate).hours(date, offset))
}
