//! End-to-end evaluation: instant and location in, sky state out.
//!
//! [`DaySky`] holds everything that only changes once per calendar day (solar
//! hours and the anchor table) so periodic callers can reuse it until the
//! date rolls over. [`SkyState`] is the per-instant result.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::common::utils::format_hour;
use crate::geo::{GeoCoordinate, SolarCalculator, SolarHours, SolarTimes};
use crate::sky::{DayPhaseEngine, HourOfDay, PhaseLabel, Rgba, SunHours};

/// Solar results and engine for one date, offset and location.
#[derive(Debug, Clone)]
pub struct DaySky {
    coordinate: GeoCoordinate,
    date: NaiveDate,
    offset: FixedOffset,
    solar: SolarHours,
    engine: DayPhaseEngine,
}

impl DaySky {
    /// Compute the day containing `instant` at `coordinate`.
    ///
    /// Missing sunrise or sunset is replaced field by field from `fallback`.
    pub fn for_instant(
        instant: &DateTime<FixedOffset>,
        coordinate: GeoCoordinate,
        fallback: SunHours,
    ) -> Self {
        let date = instant.date_naive();
        let offset = *instant.offset();
        let solar = SolarCalculator::new(coordinate).hours(date, offset);
        let engine = DayPhaseEngine::new(SunHours::from_solar(&solar, fallback));

        Self {
            coordinate,
            date,
            offset,
            solar,
            engine,
        }
    }

    /// True when `instant` falls on the same local day and offset.
    pub fn covers(&self, instant: &DateTime<FixedOffset>) -> bool {
        instant.date_naive() == self.date && *instant.offset() == self.offset
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn solar(&self) -> &SolarHours {
        &self.solar
    }

    pub fn sun_hours(&self) -> SunHours {
        self.engine.sun_hours()
    }

    pub fn engine(&self) -> &DayPhaseEngine {
        &self.engine
    }

    /// Sunrise and sunset as instants on this day.
    pub fn solar_times(&self) -> Result<SolarTimes> {
        SolarCalculator::new(self.coordinate).compute(self.date, self.offset)
    }

    /// Evaluate the sky at `instant`, which should lie on this day.
    pub fn state_at(&self, instant: DateTime<FixedOffset>) -> SkyState {
        let hour = HourOfDay::from_time(&instant);
        SkyState {
            instant,
            coordinate: self.coordinate,
            solar: self.solar,
            sun: self.engine.sun_hours(),
            hour,
            gradient: self.engine.gradient_colors(hour),
            text_color: self.engine.text_color(hour),
            label: self.engine.phase_label(hour),
        }
    }
}

/// Everything shown for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyState {
    pub instant: DateTime<FixedOffset>,
    pub coordinate: GeoCoordinate,
    /// Astronomical hours; `None` where the sun does not rise or set.
    pub solar: SolarHours,
    /// Hours actually used to place the anchors.
    pub sun: SunHours,
    pub hour: HourOfDay,
    pub gradient: Vec<Rgba>,
    pub text_color: Rgba,
    pub label: PhaseLabel,
}

impl SkyState {
    /// Run the full pipeline for one instant.
    ///
    /// No coordinate means Paris. The instant's own offset is the clock the
    /// sun hours are expressed on.
    pub fn evaluate(
        instant: DateTime<FixedOffset>,
        coordinate: Option<GeoCoordinate>,
        fallback: SunHours,
    ) -> Result<SkyState> {
        let coordinate = coordinate.unwrap_or_default();
        Ok(DaySky::for_instant(&instant, coordinate, fallback).state_at(instant))
    }

    /// Gradient stops as `#rrggbbaa`, bottom-to-top.
    pub fn gradient_hex(&self) -> Vec<String> {
        self.gradient.iter().map(|stop| stop.to_hex()).collect()
    }

    /// One-line terminal preview: swatches, time and label.
    pub fn preview_line(&self) -> String {
        let swatches: String = self.gradient.iter().map(|stop| stop.ansi_swatch()).collect();
        format!(
            "{} {} {}",
            swatches,
            self.instant.format("%H:%M"),
            self.label
        )
    }
}

/// Log a sky state through the box-drawing logger.
pub fn log_sky_state(state: &SkyState) {
    log_block_start!("Sky at {}", state.instant.format("%Y-%m-%d %H:%M:%S %:z"));
    log_indented!("Location: {}", state.coordinate.display());
    log_indented!("Phase: {}", state.label);
    log_indented!(
        "Sunrise {} / Sunset {}{}",
        format_hour(state.sun.sunrise()),
        format_hour(state.sun.sunset()),
        if state.solar.is_polar() {
            " (fallback)"
        } else {
            ""
        }
    );
    log_indented!("Gradient: {}", state.gradient_hex().join(" → "));
    log_indented!(
        "Text: {} {}",
        state.text_color.ansi_swatch(),
        state.text_color.to_hex()
    );
}
