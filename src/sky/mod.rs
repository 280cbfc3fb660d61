//! Day-phase engine: sky gradient, text color and phase label for an hour of day.
//!
//! The engine is driven by two numbers, the sunrise and sunset hours, which
//! place the moving anchors of the day. Everything else is fixed clock time.
//!
//! ## Module Structure
//!
//! - [`color`]: The [`Rgba`] color type and its presentation conversions
//! - [`palette`]: Three-stop palettes for each anchor
//! - [`anchors`]: The keyframe table built from [`SunHours`]
//! - [`gradient`]: Segment lookup and stop interpolation
//! - [`text`]: Grayscale text color with sunrise/sunset ramps
//! - [`phase`]: [`PhaseLabel`] and the label interval table

pub mod anchors;
pub mod color;
pub mod gradient;
pub mod palette;
pub mod phase;
pub mod text;

pub use anchors::{ANCHOR_COUNT, AnchorKind, PhaseAnchor, anchor_table};
pub use color::Rgba;
pub use phase::PhaseLabel;


use anyhow::Result;
use chrono::Timelike;
use serde::Serialize;

use crate::common::constants::{
    DAWN_BEFORE_SUNRISE, DEFAULT_SUNRISE_HOUR, DEFAULT_SUNSET_HOUR, DUSK_AFTER_SUNSET,
    HOURS_PER_DAY,
};
use crate::common::error::InvalidInput;
use crate::common::utils::{hour_with_minutes, normalize_hour};
use crate::geo::SolarHours;

/// Validated hour of day in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct HourOfDay(f64);

impl HourOfDay {
    /// Wrap any finite value into `[0, 24)`; 24.0 becomes 0.0.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(InvalidInput::HourOfDay(value).into());
        }
        Ok(Self(normalize_hour(value)))
    }

    /// Hour plus minutes of a clock time; seconds are ignored.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self(normalize_hour(hour_with_minutes(time)))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Resolved sunrise and sunset hours that place the moving anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunHours {
    sunrise: f64,
    sunset: f64,
}

impl SunHours {
    /// Both hours must be finite and within `[0, 24)`.
    ///
    /// No ordering is enforced; the engine tolerates sunrise after sunset.
    pub fn new(sunrise: f64, sunset: f64) -> Result<Self> {
        Ok(Self {
            sunrise: validate_sun_hour("sunrise", sunrise)?,
            sunset: validate_sun_hour("sunset", sunset)?,
        })
    }

    /// Use the given hours where present and the 6:00/20:00 defaults elsewhere.
    pub fn resolve(sunrise: Option<f64>, sunset: Option<f64>) -> Result<Self> {
        Self::new(
            sunrise.unwrap_or(DEFAULT_SUNRISE_HOUR),
            sunset.unwrap_or(DEFAULT_SUNSET_HOUR),
        )
    }

    /// Astronomical hours where the sun rises or sets, `fallback` elsewhere.
    pub fn from_solar(hours: &SolarHours, fallback: SunHours) -> Self {
        Self {
            sunrise: hours.sunrise.unwrap_or(fallback.sunrise),
            sunset: hours.sunset.unwrap_or(fallback.sunset),
        }
    }

    pub fn sunrise(&self) -> f64 {
        self.sunrise
    }

    pub fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Half an hour before sunrise, not before midnight.
    pub fn dawn(&self) -> f64 {
        (self.sunrise - DAWN_BEFORE_SUNRISE).max(0.0)
    }

    /// Half an hour after sunset, not past the end of the day.
    pub fn dusk(&self) -> f64 {
        (self.sunset + DUSK_AFTER_SUNSET).min(HOURS_PER_DAY)
    }
}

impl Default for SunHours {
    fn default() -> Self {
        Self {
            sunrise: DEFAULT_SUNRISE_HOUR,
            sunset: DEFAULT_SUNSET_HOUR,
        }
    }
}

fn validate_sun_hour(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || !(0.0..HOURS_PER_DAY).contains(&value) {
        return Err(InvalidInput::SunHour { name, value }.into());
    }
    Ok(value)
}

/// The three sky queries for one day's sun hours.
///
/// Building the engine computes the anchor table once; every query after
/// that is a table scan with no allocation beyond the returned stops.
#[derive(Debug, Clone)]
pub struct DayPhaseEngine {
    sun: SunHours,
    anchors: [PhaseAnchor; ANCHOR_COUNT],
}

impl DayPhaseEngine {
    pub fn new(sun: SunHours) -> Self {
        Self {
            sun,
            anchors: anchor_table(&sun),
        }
    }

    pub fn sun_hours(&self) -> SunHours {
        self.sun
    }

    pub fn anchors(&self) -> &[PhaseAnchor; ANCHOR_COUNT] {
        &self.anchors
    }

    /// Gradient stops, bottom-to-top.
    pub fn gradient_colors(&self, hour: HourOfDay) -> Vec<Rgba> {
        gradient::interpolate(&self.anchors, hour.value())
    }

    pub fn text_color(&self, hour: HourOfDay) -> Rgba {
        text::text_color(&self.sun, hour.value())
    }

    pub fn phase_label(&self, hour: HourOfDay) -> PhaseLabel {
        phase::label_for(&self.sun, hour.value())
    }
}

impl Default for DayPhaseEngine {
    fn default() -> Self {
        Self::new(SunHours::default())
    }
}

fn engine_for(sunrise_hour: Option<f64>, sunset_hour: Option<f64>) -> Result<DayPhaseEngine> {
    Ok(DayPhaseEngine::new(SunHours::resolve(
        sunrise_hour,
        sunset_hour,
    )?))
}

/// Gradient stops for an hour of day; missing sun hours default to 6:00/20:00.
pub fn gradient_colors(
    hour_of_day: f64,
    sunrise_hour: Option<f64>,
    sunset_hour: Option<f64>,
) -> Result<Vec<Rgba>> {
    let hour = HourOfDay::new(hour_of_day)?;
    Ok(engine_for(sunrise_hour, sunset_hour)?.gradient_colors(hour))
}

/// Text color for an hour of day; missing sun hours default to 6:00/20:00.
pub fn adaptive_text_color(
    hour_of_day: f64,
    sunrise_hour: Option<f64>,
    sunset_hour: Option<f64>,
) -> Result<Rgba> {
    let hour = HourOfDay::new(hour_of_day)?;
    Ok(engine_for(sunrise_hour, sunset_hour)?.text_color(hour))
}

/// Phase label for an hour of day; missing sun hours default to 6:00/20:00.
pub fn phase_label(
    hour_of_day: f64,
    sunrise_hour: Option<f64>,
    sunset_hour: Option<f64>,
) -> Result<PhaseLabel> {
    let hour = HourOfDay::new(hour_of_day)?;
    Ok(engine_for(sunrise_hour, sunset_hour)?.phase_label(hour))
}
