//! # skycolor library
//!
//! Sky gradient, adaptive text color and phase label for any instant and
//! location. The binary in `main.rs` only parses arguments and dispatches to
//! [`commands`]; everything else lives here so it can be tested directly.
//!
//! ## Architecture
//!
//! - **Common**: `common` module with the box-drawing logger, constants, the
//!   typed input error and numeric helpers
//! - **Geographic**: `geo` module for coordinates and sunrise/sunset hours
//! - **Sky**: `sky` module with colors, palettes, anchors, interpolation,
//!   text color and phase labels
//! - **Evaluation**: `evaluate` ties an instant and a location to a `SkyState`
//! - **Time**: `time_source` for real, fixed and simulated clocks
//! - **Configuration**: `config` module for TOML settings
//! - **Commands**: `commands` module for the CLI subcommands

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod common;

pub mod args;
pub mod commands;
pub mod config;
pub mod evaluate;
pub mod geo;
pub mod sky;
pub mod time_source;

pub use common::error::InvalidInput;
pub use evaluate::{DaySky, SkyState};
pub use geo::{GeoCoordinate, SolarCalculator, SolarHours, SolarTimes, compute_solar_times};
pub use sky::{
    DayPhaseEngine, HourOfDay, PhaseLabel, Rgba, SunHours, adaptive_text_color, gradient_colors,
    phase_label,
};
