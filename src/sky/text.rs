//! Adaptive text color.
//!
//! Text is white at night, black during the day, and fades between the two
//! around sunrise and sunset so it stays readable over the gradient.

use super::SunHours;
use super::color::Rgba;
use crate::common::constants::TEXT_TRANSITION_MARGIN;

/// Grayscale text color for a wrapped `hour`.
pub fn text_color(sun: &SunHours, hour: f64) -> Rgba {
    let dawn = sun.dawn();
    let morning_end = sun.sunrise() + TEXT_TRANSITION_MARGIN;
    let evening_start = sun.sunset() - TEXT_TRANSITION_MARGIN;
    let night_start = sun.sunset() + TEXT_TRANSITION_MARGIN;

    if hour >= night_start || hour < dawn {
        return Rgba::WHITE;
    }

    if hour < morning_end {
        // white at dawn to black one hour after sunrise
        return Rgba::gray(1.0 - (hour - dawn) / (morning_end - dawn));
    }

    if hour >= evening_start {
        // black one hour before sunset to white one hour after
        return Rgba::gray((hour - evening_start) / (night_start - evening_start));
    }

    Rgba::BLACK
}
