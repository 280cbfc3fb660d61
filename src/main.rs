//! Main application entry point.
//!
//! Parses the command line and hands the resulting action to the matching
//! handler in `skycolor::commands`. Errors from any handler are reported
//! through the logger and turned into a failing exit code here, so handlers
//! only ever return `Result`.

use skycolor::args::{CliAction, ParsedArgs};
use skycolor::commands::{help, now, simulate, sun, watch};
use skycolor::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use skycolor::common::logger::Log;
use skycolor::log_error_exit;

fn main() {
    let parsed_args = ParsedArgs::parse(std::env::args());

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            help::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            help::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            help::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Now { options } => now::handle_now_command(&options),
        CliAction::At { options, datetime } => now::handle_at_command(&options, &datetime),
        CliAction::Sun { options, date } => sun::handle_sun_command(&options, date.as_deref()),
        CliAction::Simulate {
            options,
            start_time,
            end_time,
            step_minutes,
        } => simulate::handle_simulate_command(&options, &start_time, &end_time, step_minutes),
        CliAction::Watch { options } => watch::handle_watch_command(&options),
    };

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            if Log::is_enabled() {
                log_error_exit!("{:#}", e);
            } else {
                // JSON mode keeps stdout clean
                eprintln!("Error: {e:#}");
            }
            std::process::exit(EXIT_FAILURE);
        }
    }
}
