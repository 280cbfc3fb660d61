//! Help and version output.

/// Display version information using custom logging style
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Display general usage.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("skycolor [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-j, --json             Print JSON instead of the decorated report");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("now                    Sky for the current time (default)");
    log_indented!("at, a <datetime>       Sky for \"YYYY-MM-DD HH:MM:SS\"");
    log_indented!("sun, s [date]          Sunrise, sunset and sky anchors for a day");
    log_indented!("simulate, S <start> <end> [step]");
    log_indented!("                       Timeline between two datetimes, step in minutes");
    log_indented!("watch, w               Follow the sky and announce phase changes");
    log_block_start!("Examples:");
    log_indented!("skycolor at \"2024-06-21 21:30:00\"");
    log_indented!("skycolor sun 2024-12-21 --json");
    log_indented!("skycolor simulate \"2024-06-21 04:00:00\" \"2024-06-21 23:00:00\" 30");
    log_end!();
}
