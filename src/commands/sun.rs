//! `sun`: sunrise/sunset report for one day.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use super::{CommandContext, print_json};
use crate::args::CommonOptions;
use crate::geo::{GeoCoordinate, SolarCalculator, SolarHours, log_solar_debug_info, log_solar_summary};
use crate::sky::{PhaseAnchor, SunHours, anchor_table};
use crate::time_source::{TimeSource, parse_datetime_in};

/// Everything the `sun` command reports.
#[derive(Debug, Clone, Serialize)]
pub struct SunReport {
    pub date: NaiveDate,
    pub coordinate: GeoCoordinate,
    pub utc_offset_seconds: i32,
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    pub day_length_hours: Option<f64>,
    pub solar: SolarHours,
    /// Hours used by the sky engine after fallbacks
    pub sun: SunHours,
    pub anchors: Vec<PhaseAnchor>,
}

impl SunReport {
    pub fn compute(
        coordinate: GeoCoordinate,
        date: NaiveDate,
        offset: FixedOffset,
        fallback: SunHours,
    ) -> Result<Self> {
        let calculator = SolarCalculator::new(coordinate);
        let solar = calculator.hours(date, offset);
        let times = calculator.compute(date, offset)?;
        let sun = SunHours::from_solar(&solar, fallback);

        Ok(Self {
            date,
            coordinate,
            utc_offset_seconds: offset.local_minus_utc(),
            sunrise: times.sunrise,
            sunset: times.sunset,
            day_length_hours: solar.day_length(),
            solar,
            sun,
            anchors: anchor_table(&sun).to_vec(),
        })
    }
}

/// Handle `skycolor sun [YYYY-MM-DD]`.
pub fn handle_sun_command(options: &CommonOptions, date: Option<&str>) -> Result<()> {
    let context = CommandContext::load(options)?;

    let (date, offset) = match date {
        Some(date) => {
            let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{date}'. Use YYYY-MM-DD"))?;
            // the offset in effect at noon that day
            let noon = parse_datetime_in(
                &format!("{} 12:00:00", parsed.format("%Y-%m-%d")),
                context.offset,
            )?;
            (parsed, *noon.offset())
        }
        None => {
            let now = context.time_source().now();
            (now.date_naive(), *now.offset())
        }
    };

    let report = SunReport::compute(context.coordinate, date, offset, context.fallback)?;

    if context.json {
        return print_json(&report);
    }

    context.log_header();
    if context.debug_enabled {
        log_solar_debug_info(context.coordinate, date, offset);
    }
    log_solar_summary(context.coordinate, date, offset, &report.solar, &report.sun);
    log_end!();
    Ok(())
}
