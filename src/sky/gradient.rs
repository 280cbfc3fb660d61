//! Gradient interpolation between anchors.

use super::anchors::{ANCHOR_COUNT, PhaseAnchor};
use super::color::Rgba;
use crate::common::utils::progress_between;

/// Find the segment containing `hour`.
///
/// Scans in table order for the first `[start, end)` holding `hour`. When no
/// segment matches, which only happens with degenerate anchor orderings, the
/// night-to-midnight segment is used.
pub fn segment_for(
    anchors: &[PhaseAnchor; ANCHOR_COUNT],
    hour: f64,
) -> (&PhaseAnchor, &PhaseAnchor) {
    anchors
        .windows(2)
        .find(|pair| pair[0].hour <= hour && hour < pair[1].hour)
        .map(|pair| (&pair[0], &pair[1]))
        .unwrap_or((&anchors[ANCHOR_COUNT - 2], &anchors[ANCHOR_COUNT - 1]))
}

/// Interpolated gradient stops, bottom-to-top, at a wrapped `hour`.
pub fn interpolate(anchors: &[PhaseAnchor; ANCHOR_COUNT], hour: f64) -> Vec<Rgba> {
    let (start, end) = segment_for(anchors, hour);
    let factor = progress_between(hour, start.hour, end.hour);

    start
        .colors
        .iter()
        .zip(end.colors.iter())
        .map(|(&from, &to)| Rgba::lerp(from, to, factor))
        .collect()
}
