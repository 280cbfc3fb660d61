//! Gradient keyframes.
//!
//! Thirteen anchors cover one day, some at fixed clock hours and some placed
//! relative to sunrise and sunset, followed by a copy of midnight at 24:00 so
//! the last segment wraps back into the first.

use serde::Serialize;

use super::SunHours;
use super::palette::{self, Palette};
use crate::common::constants::{
    AFTERNOON_ANCHOR_HOUR, DEEP_NIGHT_HOUR, EVENING_AFTER_DUSK, HOURS_PER_DAY, MIDDAY_HOUR,
    MORNING_AFTER_SUNRISE, NIGHT_HOUR, PRE_DAWN_BEFORE_DAWN, PRE_SUNSET_BEFORE_SUNSET,
};

/// Anchors per table, including the wrap anchor.
pub const ANCHOR_COUNT: usize = 14;

/// Which keyframe an anchor represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Midnight,
    DeepNight,
    PreDawn,
    Dawn,
    Sunrise,
    Morning,
    Midday,
    Afternoon,
    PreSunset,
    Sunset,
    Dusk,
    Evening,
    Night,
}

/// A gradient keyframe: the palette shown exactly at `hour`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseAnchor {
    pub kind: AnchorKind,
    pub hour: f64,
    pub colors: Palette,
}

impl PhaseAnchor {
    const fn new(kind: AnchorKind, hour: f64, colors: Palette) -> Self {
        Self { kind, hour, colors }
    }
}

/// Build the anchor table for one day.
///
/// Hours are not reordered: extreme sun hours can produce zero-width or
/// inverted segments, which the gradient scan simply never selects.
pub fn anchor_table(sun: &SunHours) -> [PhaseAnchor; ANCHOR_COUNT] {
    use AnchorKind::*;

    let dawn = sun.dawn();
    let dusk = sun.dusk();

    [
        PhaseAnchor::new(Midnight, 0.0, palette::MIDNIGHT),
        PhaseAnchor::new(DeepNight, DEEP_NIGHT_HOUR, palette::DEEP_NIGHT),
        PhaseAnchor::new(PreDawn, dawn - PRE_DAWN_BEFORE_DAWN, palette::PRE_DAWN),
        PhaseAnchor::new(Dawn, dawn, palette::DAWN),
        PhaseAnchor::new(Sunrise, sun.sunrise(), palette::SUNRISE),
        PhaseAnchor::new(Morning, sun.sunrise() + MORNING_AFTER_SUNRISE, palette::MORNING),
        PhaseAnchor::new(Midday, MIDDAY_HOUR, palette::MIDDAY),
        PhaseAnchor::new(Afternoon, AFTERNOON_ANCHOR_HOUR, palette::AFTERNOON),
        PhaseAnchor::new(PreSunset, sun.sunset() - PRE_SUNSET_BEFORE_SUNSET, palette::PRE_SUNSET),
        PhaseAnchor::new(Sunset, sun.sunset(), palette::SUNSET),
        PhaseAnchor::new(Dusk, dusk, palette::DUSK),
        PhaseAnchor::new(Evening, dusk + EVENING_AFTER_DUSK, palette::EVENING),
        PhaseAnchor::new(Night, NIGHT_HOUR, palette::NIGHT),
        PhaseAnchor::new(Midnight, HOURS_PER_DAY, palette::MIDNIGHT),
    ]
}
