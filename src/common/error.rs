//! Contract violations reported by the solar and sky engines.
//!
//! These are programming errors on the caller's side, not runtime conditions:
//! the engines reject them eagerly instead of letting NaN flow into colors.
//! They travel inside `anyhow::Error` and can be recovered with
//! `err.downcast_ref::<InvalidInput>()`.

use std::fmt;

/// Input rejected by the core before any computation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    Latitude(f64),
    Longitude(f64),
    Date { year: i32, month: u32, day: u32 },
    UtcOffset(i32),
    HourOfDay(f64),
    SunHour { name: &'static str, value: f64 },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude(value) => {
                write!(f, "latitude must be between -90 and 90 degrees (got {value})")
            }
            Self::Longitude(value) => {
                write!(
                    f,
                    "longitude must be between -180 and 180 degrees (got {value})"
                )
            }
            Self::Date { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
            Self::UtcOffset(seconds) => {
                write!(
                    f,
                    "UTC offset must be strictly within ±24 hours (got {seconds} seconds)"
                )
            }
            Self::HourOfDay(value) => write!(f, "hour of day must be finite (got {value})"),
            Self::SunHour { name, value } => {
                write!(f, "{name} hour must be finite and within 0..24 (got {value})")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
