//! `simulate`: a timeline of sky states between two instants.
//!
//! The timeline is driven by a [`SimulatedTimeSource`], so it runs instantly
//! and yields exactly the samples a live clock would have produced at the
//! same step.

use anyhow::{Context, Result};
use std::time::Duration;

use super::{CommandContext, print_json};
use crate::args::CommonOptions;
use crate::common::constants::{MAXIMUM_SIMULATION_STEP, MINIMUM_SIMULATION_STEP};
use crate::evaluate::{DaySky, SkyState};
use crate::geo::GeoCoordinate;
use crate::sky::SunHours;
use crate::time_source::{DATETIME_FORMAT, SimulatedTimeSource, TimeSource, parse_datetime_in};

/// Handle `skycolor simulate <start> <end> [step-minutes]`.
pub fn handle_simulate_command(
    options: &CommonOptions,
    start_time: &str,
    end_time: &str,
    step_minutes: u64,
) -> Result<()> {
    let step = simulation_step(step_minutes)?;
    let context = CommandContext::load(options)?;

    let start = parse_datetime_in(start_time, context.offset).context("Invalid start time")?;
    let end = parse_datetime_in(end_time, context.offset).context("Invalid end time")?;
    let source = SimulatedTimeSource::new(start, end)?;

    let timeline = simulate_timeline(&source, context.coordinate, context.fallback, step);

    if context.json {
        return print_json(&timeline);
    }

    context.log_header();
    log_block_start!(
        "Simulating {} → {} every {} min",
        start.format(DATETIME_FORMAT),
        end.format(DATETIME_FORMAT),
        step_minutes
    );
    for state in &timeline {
        log_indented!("{}", state.preview_line());
    }
    log_decorated!("{} samples", timeline.len());
    log_end!();
    Ok(())
}

/// Check the step against the accepted range and convert it.
pub fn simulation_step(step_minutes: u64) -> Result<Duration> {
    if !(MINIMUM_SIMULATION_STEP..=MAXIMUM_SIMULATION_STEP).contains(&step_minutes) {
        anyhow::bail!(
            "Simulation step must be between {} and {} minutes, got {}",
            MINIMUM_SIMULATION_STEP,
            MAXIMUM_SIMULATION_STEP,
            step_minutes
        );
    }
    Ok(Duration::from_secs(step_minutes * 60))
}

/// Sample the sky from the source's current time until it ends.
///
/// The end instant is always the last sample, even when the range is not a
/// multiple of `step`. Solar hours are recomputed only when the date changes.
pub fn simulate_timeline(
    source: &SimulatedTimeSource,
    coordinate: GeoCoordinate,
    fallback: SunHours,
    step: Duration,
) -> Vec<SkyState> {
    let mut timeline = Vec::new();
    let mut sky = DaySky::for_instant(&source.now(), coordinate, fallback);

    loop {
        let now = source.now();
        if !sky.covers(&now) {
            sky = DaySky::for_instant(&now, coordinate, fallback);
        }
        timeline.push(sky.state_at(now));

        if source.is_ended() {
            break;
        }
        source.sleep(step);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky::PhaseLabel;
    use crate::time_source::parse_datetime;
    use chrono::FixedOffset;

    fn cest() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    fn source(start: &str, end: &str) -> SimulatedTimeSource {
        SimulatedTimeSource::new(
            parse_datetime(start, cest()).unwrap(),
            parse_datetime(end, cest()).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_step_range() {
        assert!(simulation_step(0).is_err());
        assert!(simulation_step(1441).is_err());
        assert_eq!(simulation_step(1).unwrap(), Duration::from_secs(60));
        assert_eq!(simulation_step(1440).unwrap(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_timeline_includes_both_ends() {
        let source = source("2024-06-21 04:00:00", "2024-06-21 23:00:00");
        let timeline = simulate_timeline(
            &source,
            GeoCoordinate::paris(),
            SunHours::default(),
            Duration::from_secs(3600),
        );

        assert_eq!(timeline.len(), 20);
        assert_eq!(timeline[0].hour.value(), 4.0);
        assert_eq!(timeline[19].hour.value(), 23.0);
        assert_eq!(timeline[9].label, PhaseLabel::Noon);
        // Paris dusk is near 22:30 in June
        assert_eq!(timeline[19].label, PhaseLabel::Twilight);
    }

    #[test]
    fn test_uneven_step_ends_on_end_instant() {
        let source = source("2024-06-21 12:00:00", "2024-06-21 13:10:00");
        let timeline = simulate_timeline(
            &source,
            GeoCoordinate::paris(),
            SunHours::default(),
            Duration::from_secs(30 * 60),
        );

        let minutes: Vec<_> = timeline
            .iter()
            .map(|state| state.instant.format("%H:%M").to_string())
            .collect();
        assert_eq!(minutes, ["12:00", "12:30", "13:00", "13:10"]);
    }

    #[test]
    fn test_timeline_across_midnight_recomputes_day() {
        let source = source("2024-06-21 23:00:00", "2024-06-22 01:00:00");
        let timeline = simulate_timeline(
            &source,
            GeoCoordinate::paris(),
            SunHours::default(),
            Duration::from_secs(3600),
        );

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[1].hour.value(), 0.0);
        assert_eq!(timeline[1].label, PhaseLabel::DeepNight);
        assert_ne!(timeline[0].solar, timeline[2].solar);
    }
}
