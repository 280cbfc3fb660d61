//! Geographic location and sunrise/sunset calculations.
//!
//! ## Module Structure
//!
//! - [`solar`]: Almanac-style sunrise/sunset approximation for one coordinate and date
//! - [`display`]: Formatting and logging of solar results
//!
//! Location acquisition itself is a collaborator: anything that can answer a
//! one-shot [`LocationProvider::request_location`] can feed the engine. When no
//! location is available the Paris default is used.

pub mod display;
pub mod solar;

pub use display::{log_solar_debug_info, log_solar_summary};
pub use solar::{SolarCalculator, SolarEvent, SolarHours, SolarTimes, compute_solar_times};


use anyhow::Result;
use serde::Serialize;

use crate::common::constants::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, MAXIMUM_LATITUDE, MAXIMUM_LONGITUDE, MINIMUM_LATITUDE,
    MINIMUM_LONGITUDE,
};
use crate::common::error::InvalidInput;

/// A validated observer position in degrees.
///
/// Positive latitude is north, positive longitude is east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
            return Err(InvalidInput::Latitude(latitude).into());
        }
        if !longitude.is_finite() || !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude)
        {
            return Err(InvalidInput::Longitude(longitude).into());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Paris, used whenever no location is available.
    pub const fn paris() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format as `48.857°N, 2.352°E`.
    pub fn display(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.3}°{}, {:.3}°{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::paris()
    }
}

/// One-shot location collaborator.
///
/// Implementations answer a single request; `None` means the location is
/// unavailable (no permission, no fix, disabled services).
#[cfg_attr(test, mockall::automock)]
pub trait LocationProvider {
    fn request_location(&self) -> Option<GeoCoordinate>;
}

/// Provider that always answers with the same coordinate, or nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<GeoCoordinate>);

impl LocationProvider for FixedLocation {
    fn request_location(&self) -> Option<GeoCoordinate> {
        self.0
    }
}

/// Ask `provider` for a location and fall back to Paris when it has none.
pub fn resolve_location(provider: &dyn LocationProvider) -> GeoCoordinate {
    provider.request_location().unwrap_or_default()
}
