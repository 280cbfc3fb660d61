//! Application constants and default values for skycolor.
//!
//! This module contains the configuration defaults, validation limits and the
//! fixed astronomical and phase constants used throughout the application.

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_LATITUDE: f64 = 48.8566; // Paris
pub const DEFAULT_LONGITUDE: f64 = 2.3522; // Paris
pub const DEFAULT_SUNRISE_HOUR: f64 = 6.0; // used when the sun does not rise
pub const DEFAULT_SUNSET_HOUR: f64 = 20.0; // used when the sun does not set
pub const DEFAULT_UPDATE_INTERVAL: u64 = 60; // seconds between watch evaluations
pub const DEFAULT_SIMULATION_STEP: u64 = 60; // minutes between simulated samples

pub const CONFIG_FILE_NAME: &str = "skycolor.toml";
pub const GEO_FILE_NAME: &str = "geo.toml";
pub const CONFIG_DIR_NAME: &str = "skycolor";

// ═══ Validation Limits ═══

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// Civil UTC offsets in use range from UTC-12 to UTC+14
pub const MINIMUM_UTC_OFFSET_HOURS: f64 = -12.0;
pub const MAXIMUM_UTC_OFFSET_HOURS: f64 = 14.0;

pub const MINIMUM_UPDATE_INTERVAL: u64 = 10; // seconds
pub const MAXIMUM_UPDATE_INTERVAL: u64 = 3600; // seconds

pub const MINIMUM_SIMULATION_STEP: u64 = 1; // minutes
pub const MAXIMUM_SIMULATION_STEP: u64 = 1440; // minutes (one day)

// ═══ Solar Approximation Constants ═══
// Almanac sunrise/sunset approximation, angles in radians unless noted

pub const HORIZON_CORRECTION_DEGREES: f64 = -0.833; // refraction plus solar radius
pub const MEAN_LONGITUDE_AT_EPOCH: f64 = 4.8771;
pub const MEAN_LONGITUDE_RATE: f64 = 0.0172; // per day
pub const RIGHT_ASCENSION_FACTOR: f64 = 0.91764; // cos(obliquity)
pub const DECLINATION_FACTOR: f64 = 0.39782; // sin(obliquity)
pub const SIDEREAL_RATE: f64 = 0.06571; // hours per day
pub const SIDEREAL_OFFSET: f64 = 6.622; // hours
pub const SUNRISE_APPROX_HOUR: f64 = 6.0;
pub const SUNSET_APPROX_HOUR: f64 = 18.0;

// ═══ Phase Offsets ═══
// All in hours relative to sunrise/sunset

pub const DAWN_BEFORE_SUNRISE: f64 = 0.5;
pub const DUSK_AFTER_SUNSET: f64 = 0.5;
pub const PRE_DAWN_BEFORE_DAWN: f64 = 1.0;
pub const MORNING_AFTER_SUNRISE: f64 = 2.0;
pub const PRE_SUNSET_BEFORE_SUNSET: f64 = 1.0;
pub const EVENING_AFTER_DUSK: f64 = 1.0;
pub const TWILIGHT_LENGTH: f64 = 1.5;
pub const TEXT_TRANSITION_MARGIN: f64 = 1.0;

// Fixed clock anchors
pub const DEEP_NIGHT_HOUR: f64 = 2.0;
pub const LATE_MORNING_HOUR: f64 = 10.0;
pub const MIDDAY_HOUR: f64 = 12.0;
pub const AFTERNOON_LABEL_HOUR: f64 = 14.0;
pub const AFTERNOON_ANCHOR_HOUR: f64 = 15.0;
pub const NIGHT_HOUR: f64 = 22.0;
pub const HOURS_PER_DAY: f64 = 24.0;

// ═══ Exit Codes ═══

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

// ═══ Test Constants ═══
// Shared fixtures so tests describe the same places and days
