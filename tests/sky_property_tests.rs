use proptest::prelude::*;
use skycolor::{InvalidInput, PhaseLabel, Rgba, adaptive_text_color, gradient_colors, phase_label};

/// Any finite hour, including values outside one day
fn hour_strategy() -> impl Strategy<Value = f64> {
    -48.0..72.0
}

/// Sun hours anywhere in the day, ordered or not
fn sun_hour_strategy() -> impl Strategy<Value = f64> {
    0.0..24.0
}

fn in_unit_range(color: &Rgba) -> bool {
    [color.r, color.g, color.b, color.a]
        .iter()
        .all(|channel| (0.0..=1.0).contains(channel))
}

#[cfg(test)]
mod flat_api_tests {
    use super::*;

    proptest! {
        /// Three stops, every channel inside [0, 1], whatever the inputs
        #[test]
        fn test_gradient_is_always_three_valid_stops(
            hour in hour_strategy(),
            sunrise in sun_hour_strategy(),
            sunset in sun_hour_strategy(),
        ) {
            let stops = gradient_colors(hour, Some(sunrise), Some(sunset)).unwrap();
            prop_assert_eq!(stops.len(), 3);
            for stop in &stops {
                prop_assert!(in_unit_range(stop), "stop {:?} at hour {}", stop, hour);
            }
        }

        /// Text is always an opaque gray
        #[test]
        fn test_text_color_is_opaque_gray(
            hour in hour_strategy(),
            sunrise in sun_hour_strategy(),
            sunset in sun_hour_strategy(),
        ) {
            let color = adaptive_text_color(hour, Some(sunrise), Some(sunset)).unwrap();
            prop_assert_eq!(color.a, 1.0);
            prop_assert_eq!(color.r, color.g);
            prop_assert_eq!(color.g, color.b);
            prop_assert!((0.0..=1.0).contains(&color.r));
        }

        /// Labels never fail for valid input
        #[test]
        fn test_label_is_total(
            hour in hour_strategy(),
            sunrise in sun_hour_strategy(),
            sunset in sun_hour_strategy(),
        ) {
            prop_assert!(phase_label(hour, Some(sunrise), Some(sunset)).is_ok());
        }

        /// Civil days are black-on-sky at midday
        #[test]
        fn test_midday_text_is_black(
            sunrise in 4.0..9.0f64,
            sunset in 17.0..20.0f64,
        ) {
            let color = adaptive_text_color(12.5, Some(sunrise), Some(sunset)).unwrap();
            prop_assert_eq!(color, Rgba::BLACK);
        }
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_defaults_match_explicit_hours() {
        for hour in [0.0, 5.75, 12.0, 19.5, 23.99] {
            assert_eq!(
                gradient_colors(hour, None, None).unwrap(),
                gradient_colors(hour, Some(6.0), Some(20.0)).unwrap()
            );
            assert_eq!(
                phase_label(hour, None, None).unwrap(),
                phase_label(hour, Some(6.0), Some(20.0)).unwrap()
            );
        }
    }

    #[test]
    fn test_end_of_day_wraps_to_midnight() {
        assert_eq!(
            gradient_colors(24.0, None, None).unwrap(),
            gradient_colors(0.0, None, None).unwrap()
        );
        assert_eq!(
            phase_label(24.0, None, None).unwrap(),
            PhaseLabel::DeepNight
        );
    }

    #[test]
    fn test_non_finite_hour_is_rejected() {
        for hour in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = gradient_colors(hour, None, None).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<InvalidInput>(),
                Some(InvalidInput::HourOfDay(_))
            ));
        }
    }

    #[test]
    fn test_out_of_range_sun_hours_are_rejected() {
        let err = adaptive_text_color(12.0, Some(24.0), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InvalidInput>(),
            Some(InvalidInput::SunHour { name: "sunrise", .. })
        ));

        let err = phase_label(12.0, None, Some(-0.5)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InvalidInput>(),
            Some(InvalidInput::SunHour { name: "sunset", .. })
        ));
    }

    #[test]
    fn test_night_and_day_text() {
        assert_eq!(adaptive_text_color(2.0, None, None).unwrap(), Rgba::WHITE);
        assert_eq!(adaptive_text_color(13.0, None, None).unwrap(), Rgba::BLACK);
        assert_eq!(adaptive_text_color(23.0, None, None).unwrap(), Rgba::WHITE);
    }
}
