//! Sky palettes, one per phase anchor.
//!
//! Every palette has exactly three stops ordered bottom-to-top. Phases that
//! are naturally two-tone carry the midpoint of their two colors in the
//! middle, which renders the same linear gradient while keeping stop counts
//! equal across anchors so interpolation never drops a stop.

use super::color::Rgba;

/// Number of stops in every palette.
pub const STOP_COUNT: usize = 3;

pub type Palette = [Rgba; STOP_COUNT];

// System tints, fully opaque; each palette applies its own opacity
const INDIGO: Rgba = Rgba::new(0.345, 0.337, 0.839, 1.0);
const PURPLE: Rgba = Rgba::new(0.686, 0.322, 0.871, 1.0);
const PINK: Rgba = Rgba::new(1.0, 0.176, 0.333, 1.0);
const BLUE: Rgba = Rgba::new(0.0, 0.478, 1.0, 1.0);
const ORANGE: Rgba = Rgba::new(1.0, 0.584, 0.0, 1.0);
const YELLOW: Rgba = Rgba::new(1.0, 0.8, 0.0, 1.0);
const CYAN: Rgba = Rgba::new(0.196, 0.678, 0.902, 1.0);
const BLACK: Rgba = Rgba::BLACK;

const fn two_tone(bottom: Rgba, top: Rgba) -> Palette {
    // const-friendly midpoint
    let middle = Rgba::new(
        (bottom.r + top.r) / 2.0,
        (bottom.g + top.g) / 2.0,
        (bottom.b + top.b) / 2.0,
        (bottom.a + top.a) / 2.0,
    );
    [bottom, middle, top]
}

pub const MIDNIGHT: Palette = two_tone(BLACK, INDIGO.with_alpha(0.3));
pub const DEEP_NIGHT: Palette = two_tone(BLACK, INDIGO.with_alpha(0.2));
pub const PRE_DAWN: Palette = two_tone(INDIGO.with_alpha(0.5), PURPLE.with_alpha(0.3));
pub const DAWN: Palette = [
    PURPLE.with_alpha(0.6),
    PINK.with_alpha(0.5),
    BLUE.with_alpha(0.3),
];
pub const SUNRISE: Palette = [
    ORANGE.with_alpha(0.7),
    YELLOW.with_alpha(0.5),
    BLUE.with_alpha(0.3),
];
pub const MORNING: Palette = two_tone(BLUE.with_alpha(0.3), BLUE.with_alpha(0.1));
pub const MIDDAY: Palette = two_tone(BLUE.with_alpha(0.2), CYAN.with_alpha(0.1));
pub const AFTERNOON: Palette = two_tone(BLUE.with_alpha(0.3), BLUE.with_alpha(0.2));
pub const PRE_SUNSET: Palette = two_tone(BLUE.with_alpha(0.3), YELLOW.with_alpha(0.3));
pub const SUNSET: Palette = [
    ORANGE.with_alpha(0.7),
    PINK.with_alpha(0.5),
    PURPLE.with_alpha(0.4),
];
pub const DUSK: Palette = [
    PURPLE.with_alpha(0.6),
    INDIGO.with_alpha(0.5),
    BLUE.with_alpha(0.2),
];
pub const EVENING: Palette = two_tone(INDIGO.with_alpha(0.6), INDIGO.with_alpha(0.4));
pub const NIGHT: Palette = two_tone(INDIGO.with_alpha(0.4), BLACK);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tone_middle_is_midpoint() {
        let [bottom, middle, top] = EVENING;
        let expected = Rgba::midpoint(bottom, top);
        assert!(middle.distance(expected) < 1e-12);
    }

    #[test]
    fn test_all_channels_in_unit_range() {
        let palettes = [
            MIDNIGHT, DEEP_NIGHT, PRE_DAWN, DAWN, SUNRISE, MORNING, MIDDAY, AFTERNOON,
            PRE_SUNSET, SUNSET, DUSK, EVENING, NIGHT,
        ];
        for palette in palettes {
            for stop in palette {
                for channel in [stop.r, stop.g, stop.b, stop.a] {
                    assert!((0.0..=1.0).contains(&channel));
                }
            }
        }
    }

    #[test]
    fn test_night_fades_to_black_at_top() {
        assert_eq!(NIGHT[2], Rgba::BLACK);
        assert_eq!(MIDNIGHT[0], Rgba::BLACK);
    }
}
