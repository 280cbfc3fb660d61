//! Human-readable names for the time of day.

use std::fmt;

use serde::{Serialize, Serializer};

use super::SunHours;
use crate::common::constants::{
    AFTERNOON_LABEL_HOUR, LATE_MORNING_HOUR, MIDDAY_HOUR, NIGHT_HOUR, PRE_DAWN_BEFORE_DAWN,
    TWILIGHT_LENGTH,
};

/// One of the thirteen day phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseLabel {
    DeepNight,
    EarlyMorning,
    Dawn,
    Sunrise,
    Morning,
    LateMorning,
    Noon,
    Afternoon,
    LateAfternoon,
    Sunset,
    Twilight,
    Evening,
    Night,
}

impl PhaseLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeepNight => "Deep night",
            Self::EarlyMorning => "Early morning",
            Self::Dawn => "Dawn",
            Self::Sunrise => "Sunrise",
            Self::Morning => "Morning",
            Self::LateMorning => "Late morning",
            Self::Noon => "Noon",
            Self::Afternoon => "Afternoon",
            Self::LateAfternoon => "Late afternoon",
            Self::Sunset => "Sunset",
            Self::Twilight => "Twilight",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PhaseLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Half-open `[start, end)` interval mapped to a label.
type LabelRange = (f64, f64, PhaseLabel);

/// Ordered label intervals; anything left over is night.
fn label_table(sun: &SunHours) -> [LabelRange; 12] {
    use PhaseLabel::*;

    let dawn = sun.dawn();
    let dusk = sun.dusk();
    let sunrise = sun.sunrise();
    let sunset = sun.sunset();
    let early_morning = dawn - PRE_DAWN_BEFORE_DAWN;

    [
        (0.0, early_morning, DeepNight),
        (early_morning, dawn, EarlyMorning),
        (dawn, sunrise, Dawn),
        (sunrise, sunrise + 1.0, Sunrise),
        (sunrise + 1.0, LATE_MORNING_HOUR, Morning),
        (LATE_MORNING_HOUR, MIDDAY_HOUR, LateMorning),
        (MIDDAY_HOUR, AFTERNOON_LABEL_HOUR, Noon),
        (AFTERNOON_LABEL_HOUR, sunset - 2.0, Afternoon),
        (sunset - 2.0, sunset, LateAfternoon),
        (sunset, dusk, Sunset),
        (dusk, dusk + TWILIGHT_LENGTH, Twilight),
        (dusk + TWILIGHT_LENGTH, NIGHT_HOUR, Evening),
    ]
}

/// Label for a wrapped `hour`: first matching interval wins.
pub fn label_for(sun: &SunHours, hour: f64) -> PhaseLabel {
    label_table(sun)
        .into_iter()
        .find(|(start, end, _)| *start <= hour && hour < *end)
        .map(|(_, _, label)| label)
        .unwrap_or(PhaseLabel::Night)
}
