//! `watch`: follow the sky and announce phase changes.
//!
//! The loop itself is [`run_watch`], which takes its clock, stop condition and
//! output as parameters. The command wires it to the real clock, to
//! SIGINT/SIGTERM and to either the decorated log or JSON lines.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::CommandContext;
use crate::args::CommonOptions;
use crate::evaluate::{DaySky, SkyState, log_sky_state};
use crate::geo::GeoCoordinate;
use crate::sky::{PhaseLabel, SunHours};
use crate::time_source::TimeSource;

/// Longest uninterrupted sleep on a real clock, so signals are noticed quickly.
const SLEEP_SLICE: Duration = Duration::from_millis(250);

/// Something worth reporting while watching.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// First evaluation after starting
    Initial { state: SkyState },
    /// The label differs from the previous evaluation
    PhaseChanged { from: PhaseLabel, state: SkyState },
    /// The local date rolled over and solar hours were recomputed
    NewDay {
        date: NaiveDate,
        sun: SunHours,
        state: SkyState,
    },
}

impl WatchEvent {
    pub fn state(&self) -> &SkyState {
        match self {
            Self::Initial { state }
            | Self::PhaseChanged { state, .. }
            | Self::NewDay { state, .. } => state,
        }
    }
}

/// Handle `skycolor watch`.
pub fn handle_watch_command(options: &CommonOptions) -> Result<()> {
    let context = CommandContext::load(options)?;
    let interval = context.config.update_interval();

    // Starts false and is set by the handler when a signal arrives
    let stop_requested = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&stop_requested))
        .context("Failed to register SIGINT handler")?;
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&stop_requested))
        .context("Failed to register SIGTERM handler")?;

    context.log_header();
    log_block_start!(
        "Watching the sky every {}s (press Ctrl+C to stop)",
        interval.as_secs()
    );

    let source = context.time_source();
    run_watch(
        &source,
        context.coordinate,
        context.fallback,
        interval,
        || stop_requested.load(Ordering::SeqCst),
        |event| display_event(event, context.json),
    )?;

    log_block_start!("Stopped watching");
    log_end!();
    Ok(())
}

/// Evaluate every `interval` until `should_stop` or the source ends.
///
/// Emits [`WatchEvent::Initial`] once, then an event whenever the date or the
/// phase label changes. Evaluations that change nothing are silent.
pub fn run_watch<S, E>(
    source: &dyn TimeSource,
    coordinate: GeoCoordinate,
    fallback: SunHours,
    interval: Duration,
    should_stop: S,
    mut emit: E,
) -> Result<()>
where
    S: Fn() -> bool,
    E: FnMut(&WatchEvent) -> Result<()>,
{
    let now = source.now();
    let mut sky = DaySky::for_instant(&now, coordinate, fallback);
    let mut current = sky.state_at(now);
    emit(&WatchEvent::Initial {
        state: current.clone(),
    })?;

    while !should_stop() && !source.is_ended() {
        sleep_interruptible(source, interval, &should_stop);
        if should_stop() {
            break;
        }

        let now = source.now();
        let event = if sky.covers(&now) {
            let next = sky.state_at(now);
            let changed = next.label != current.label;
            let from = current.label;
            current = next;
            changed.then(|| WatchEvent::PhaseChanged {
                from,
                state: current.clone(),
            })
        } else {
            sky = DaySky::for_instant(&now, coordinate, fallback);
            current = sky.state_at(now);
            Some(WatchEvent::NewDay {
                date: sky.date(),
                sun: sky.sun_hours(),
                state: current.clone(),
            })
        };

        if let Some(event) = event {
            emit(&event)?;
        }
    }

    Ok(())
}

fn sleep_interruptible<S: Fn() -> bool>(source: &dyn TimeSource, duration: Duration, should_stop: &S) {
    if source.is_simulated() {
        source.sleep(duration);
        return;
    }

    let mut remaining = duration;
    while !remaining.is_zero() && !should_stop() {
        let slice = remaining.min(SLEEP_SLICE);
        source.sleep(slice);
        remaining -= slice;
    }
}

fn display_event(event: &WatchEvent, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(event).context("Failed to serialize watch event")?;
        println!("{line}");
        return Ok(());
    }

    match event {
        WatchEvent::Initial { state } => log_sky_state(state),
        WatchEvent::PhaseChanged { from, state } => {
            log_block_start!(
                "{} → {} at {}",
                from,
                state.label,
                state.instant.format("%H:%M")
            );
            log_indented!("{}", state.preview_line());
        }
        WatchEvent::NewDay { date, state, .. } => {
            log_block_start!("New day: {}", date.format("%Y-%m-%d"));
            log_sky_state(state);
        }
    }
    Ok(())
}
