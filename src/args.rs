//! Command-line argument parsing and processing.
//!
//! Arguments are parsed by hand into a [`CliAction`]. Global flags may appear
//! anywhere; the first positional argument selects the command. Help and
//! version flags take precedence over everything else, and anything
//! unrecognized shows the help text instead of guessing.

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    pub debug_enabled: bool,
    /// Print machine-readable JSON instead of the decorated log
    pub json: bool,
    pub config_dir: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Evaluate the sky for the current instant (also the default)
    Now { options: CommonOptions },
    /// Evaluate the sky for a given "YYYY-MM-DD HH:MM:SS"
    At {
        options: CommonOptions,
        datetime: String,
    },
    /// Report sunrise, sunset and the derived anchors for a day
    Sun {
        options: CommonOptions,
        date: Option<String>,
    },
    /// Print a timeline of sky states between two instants
    Simulate {
        options: CommonOptions,
        start_time: String,
        end_time: String,
        step_minutes: u64,
    },
    /// Keep evaluating and announce phase changes until interrupted
    Watch { options: CommonOptions },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args()),
    ///   including the program name
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ParsedArgs {
            action: parse_action(args),
        }
    }
}

fn parse_action<I, S>(args: I) -> CliAction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CommonOptions::default();
    let mut display_help = false;
    let mut display_version = false;
    let mut unknown_arg_found = false;
    let mut positionals: Vec<String> = Vec::new();

    let mut iter = args.into_iter().skip(1).map(|s| s.as_ref().to_string());
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug_enabled = true,
            "--json" | "-j" => options.json = true,
            "--help" | "-h" => display_help = true,
            "--version" | "-V" | "-v" => display_version = true,
            "--config" | "-c" => match iter.next() {
                Some(dir) if !dir.starts_with('-') => options.config_dir = Some(dir),
                _ => {
                    log_warning!("Missing directory for --config. Usage: skycolor --config <dir>");
                    unknown_arg_found = true;
                }
            },
            _ if arg.starts_with('-') => {
                log_warning!("Unknown argument: {}", arg);
                unknown_arg_found = true;
            }
            _ => positionals.push(arg),
        }
    }

    if display_version {
        return CliAction::ShowVersion;
    }
    if display_help {
        return CliAction::ShowHelp;
    }
    if unknown_arg_found {
        return CliAction::ShowHelpDueToError;
    }

    let Some((command, rest)) = positionals.split_first() else {
        return CliAction::Now { options };
    };

    match (command.as_str(), rest) {
        ("now", []) => CliAction::Now { options },
        ("watch" | "w", []) => CliAction::Watch { options },
        ("at" | "a", [datetime]) => CliAction::At {
            options,
            datetime: datetime.clone(),
        },
        // Unquoted "YYYY-MM-DD HH:MM:SS" arrives as two arguments
        ("at" | "a", [date, time]) => CliAction::At {
            options,
            datetime: format!("{date} {time}"),
        },
        ("sun" | "s", []) => CliAction::Sun {
            options,
            date: None,
        },
        ("sun" | "s", [date]) => CliAction::Sun {
            options,
            date: Some(date.clone()),
        },
        ("simulate" | "S", rest) => parse_simulate(options, rest),
        (command, _) => {
            log_warning!(
                "Unknown command or wrong number of arguments: '{}'",
                command
            );
            CliAction::ShowHelpDueToError
        }
    }
}

/// `simulate <start> <end> [step-minutes]`, with start and end either quoted
/// or split into date and time.
fn parse_simulate(options: CommonOptions, rest: &[String]) -> CliAction {
    let (start_time, end_time, step) = match rest {
        [start, end] => (start.clone(), end.clone(), None),
        [start, end, step] => (start.clone(), end.clone(), Some(step)),
        [start_date, start_time, end_date, end_time] => (
            format!("{start_date} {start_time}"),
            format!("{end_date} {end_time}"),
            None,
        ),
        [start_date, start_time, end_date, end_time, step] => (
            format!("{start_date} {start_time}"),
            format!("{end_date} {end_time}"),
            Some(step),
        ),
        _ => {
            log_warning!(
                "Usage: skycolor simulate \"YYYY-MM-DD HH:MM:SS\" \"YYYY-MM-DD HH:MM:SS\" [step-minutes]"
            );
            return CliAction::ShowHelpDueToError;
        }
    };

    let step_minutes = match step {
        None => crate::common::constants::DEFAULT_SIMULATION_STEP,
        Some(step) => match step.parse::<u64>() {
            Ok(minutes) => minutes,
            Err(_) => {
                log_warning!("Invalid step '{}': expected a number of minutes", step);
                return CliAction::ShowHelpDueToError;
            }
        },
    };

    CliAction::Simulate {
        options,
        start_time,
        end_time,
        step_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::logger::Log;

    fn parse(args: &[&str]) -> CliAction {
        let mut full = vec!["skycolor"];
        full.extend_from_slice(args);
        ParsedArgs::parse(full).action
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]),
            CliAction::Now {
                options: CommonOptions::default()
            }
        );
    }

    #[test]
    fn test_parse_debug_flag() {
        let expected = CliAction::Now {
            options: CommonOptions {
                debug_enabled: true,
                ..Default::default()
            },
        };
        assert_eq!(parse(&["--debug"]), expected);
        assert_eq!(parse(&["-d", "now"]), expected);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-h"]), CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_version_short_flags() {
        assert_eq!(parse(&["--version"]), CliAction::ShowVersion);
        assert_eq!(parse(&["-V"]), CliAction::ShowVersion);
        assert_eq!(parse(&["-v"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_multiple_flags() {
        // Help takes precedence over commands and other flags
        assert_eq!(parse(&["--debug", "sun", "--help"]), CliAction::ShowHelp);
        // Version takes precedence over help
        assert_eq!(parse(&["-h", "-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_unknown_arguments() {
        Log::set_enabled(false);
        assert_eq!(parse(&["--bogus"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["dance"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["now", "extra"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["--config"]), CliAction::ShowHelpDueToError);
        Log::set_enabled(true);
    }

    #[test]
    fn test_parse_at_command() {
        let expected = CliAction::At {
            options: CommonOptions::default(),
            datetime: "2024-06-21 13:45:00".to_string(),
        };
        assert_eq!(parse(&["at", "2024-06-21 13:45:00"]), expected);
        assert_eq!(parse(&["at", "2024-06-21", "13:45:00"]), expected);
    }

    #[test]
    fn test_parse_sun_command() {
        assert_eq!(
            parse(&["sun"]),
            CliAction::Sun {
                options: CommonOptions::default(),
                date: None
            }
        );
        assert_eq!(
            parse(&["sun", "2024-12-21", "--json"]),
            CliAction::Sun {
                options: CommonOptions {
                    json: true,
                    ..Default::default()
                },
                date: Some("2024-12-21".to_string())
            }
        );
    }

    #[test]
    fn test_parse_simulate_command() {
        assert_eq!(
            parse(&["simulate", "2024-06-21 00:00:00", "2024-06-22 00:00:00"]),
            CliAction::Simulate {
                options: CommonOptions::default(),
                start_time: "2024-06-21 00:00:00".to_string(),
                end_time: "2024-06-22 00:00:00".to_string(),
                step_minutes: 60,
            }
        );
        assert_eq!(
            parse(&[
                "simulate", "2024-06-21", "04:00:00", "2024-06-21", "07:00:00", "15"
            ]),
            CliAction::Simulate {
                options: CommonOptions::default(),
                start_time: "2024-06-21 04:00:00".to_string(),
                end_time: "2024-06-21 07:00:00".to_string(),
                step_minutes: 15,
            }
        );
    }

    #[test]
    fn test_parse_simulate_invalid_step() {
        Log::set_enabled(false);
        let action = parse(&["simulate", "2024-06-21 00:00:00", "2024-06-22 00:00:00", "x"]);
        Log::set_enabled(true);
        assert_eq!(action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_config_dir_anywhere() {
        assert_eq!(
            parse(&["watch", "--config", "/tmp/sky"]),
            CliAction::Watch {
                options: CommonOptions {
                    config_dir: Some("/tmp/sky".to_string()),
                    ..Default::default()
                }
            }
        );
        assert_eq!(
            parse(&["-c", "/tmp/sky", "-j", "now"]),
            CliAction::Now {
                options: CommonOptions {
                    json: true,
                    config_dir: Some("/tmp/sky".to_string()),
                    ..Default::default()
                }
            }
        );
    }
}
