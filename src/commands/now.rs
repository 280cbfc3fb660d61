//! `now` and `at`: evaluate the sky for a single instant.

use anyhow::Result;

use super::{CommandContext, print_json};
use crate::args::CommonOptions;
use crate::evaluate::{SkyState, log_sky_state};
use crate::geo::log_solar_debug_info;
use crate::time_source::{FixedTimeSource, TimeSource, parse_datetime_in};

/// Handle `skycolor` / `skycolor now`.
pub fn handle_now_command(options: &CommonOptions) -> Result<()> {
    let context = CommandContext::load(options)?;
    let source = context.time_source();
    report_instant(&context, &source)
}

/// Handle `skycolor at "YYYY-MM-DD HH:MM:SS"`.
pub fn handle_at_command(options: &CommonOptions, datetime: &str) -> Result<()> {
    let context = CommandContext::load(options)?;
    let instant = parse_datetime_in(datetime, context.offset)?;
    report_instant(&context, &FixedTimeSource::new(instant))
}

/// Evaluate `source.now()` and print it.
pub fn report_instant(context: &CommandContext, source: &dyn TimeSource) -> Result<()> {
    let state = SkyState::evaluate(source.now(), Some(context.coordinate), context.fallback)?;

    if context.json {
        return print_json(&state);
    }

    context.log_header();
    if context.debug_enabled {
        log_solar_debug_info(
            state.coordinate,
            state.instant.date_naive(),
            *state.instant.offset(),
        );
    }
    log_sky_state(&state);
    log_end!();
    Ok(())
}
