// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CIE L\*a\*b\* color representation (D65 white point), and the Delta-E 2000 distance.
//!
//! The conversion is done by the [palette](https://docs.rs/palette) crate, which is only
//! compiled in with the `lab` feature. Without it every fallible function in this module
//! returns [`XtermColorError::LabSupportNotInstalled`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/CIELAB_color_space>
//! - <https://en.wikipedia.org/wiki/Color_difference#CIEDE2000>
//!
//! [`XtermColorError::LabSupportNotInstalled`]: crate::XtermColorError::LabSupportNotInstalled

use super::RgbValue;
use crate::XtermResult;
#[cfg(not(feature = "lab"))]
use crate::XtermColorError;

/// Whether this build can convert colors to Lab.
pub const HAS_LAB_SUPPORT: bool = cfg!(feature = "lab");

#[derive(Clone, PartialEq, Copy, Debug, Default)]
pub struct LabValue {
    /// Lightness, `0.0..=100.0`.
    pub l: f64,
    /// Green (negative) to red (positive).
    pub a: f64,
    /// Blue (negative) to yellow (positive).
    pub b: f64,
}

impl LabValue {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self { Self { l, a, b } }

    /// # Errors
    ///
    /// Returns [`crate::XtermColorError::LabSupportNotInstalled`] without the `lab`
    /// feature.
    pub fn try_from_rgb(rgb: RgbValue) -> XtermResult<Self> {
        #[cfg(feature = "lab")]
        {
            Ok(palette_impl::rgb_to_lab(rgb))
        }
        #[cfg(not(feature = "lab"))]
        {
            let _ = rgb;
            Err(XtermColorError::LabSupportNotInstalled)
        }
    }

    /// Delta-E 2000 distance to `other`. `0.0` means identical, and a difference of
    /// about `2.3` is the "just noticeable" threshold.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XtermColorError::LabSupportNotInstalled`] without the `lab`
    /// feature.
    pub fn delta_e_cie2000(&self, other: &LabValue) -> XtermResult<f64> {
        #[cfg(feature = "lab")]
        {
            Ok(palette_impl::ciede2000(*self, *other))
        }
        #[cfg(not(feature = "lab"))]
        {
            let _ = (self, other);
            Err(XtermColorError::LabSupportNotInstalled)
        }
    }
}

/// Delta-E 2000 distance between two RGB colors.
///
/// # Errors
///
/// Returns [`crate::XtermColorError::LabSupportNotInstalled`] without the `lab` feature.
pub fn delta_e_cie2000(first: RgbValue, second: RgbValue) -> XtermResult<f64> {
    first.as_lab()?.delta_e_cie2000(&second.as_lab()?)
}

#[cfg(feature = "lab")]
mod palette_impl {
    use palette::{FromColor, Lab, Srgb, color_difference::Ciede2000, white_point::D65};

    use super::{LabValue, RgbValue};

    pub fn rgb_to_lab(rgb: RgbValue) -> LabValue {
        let srgb = Srgb::new(rgb.red, rgb.green, rgb.blue).into_format::<f64>();
        let lab = Lab::<D65, f64>::from_color(srgb);
        LabValue::new(lab.l, lab.a, lab.b)
    }

    pub fn ciede2000(first: LabValue, second: LabValue) -> f64 {
        let first = Lab::<D65, f64>::new(first.l, first.a, first.b);
        let second = Lab::<D65, f64>::new(second.l, second.a, second.b);
        first.difference(second)
    }
}

#[cfg(all(test, feature = "lab"))]
mod tests {
    use test_case::test_case;

    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test_case(RgbValue::from_u8(0, 0, 0),       0.0,   0.0,    0.0)]
    #[test_case(RgbValue::from_u8(255, 255, 255), 100.0, 0.0,    0.0)]
    #[test_case(RgbValue::from_u8(255, 0, 0),     53.24, 80.09,  67.20)]
    #[test_case(RgbValue::from_u8(0, 0, 255),     32.30, 79.19, -107.86)]
    fn test_rgb_to_lab(rgb: RgbValue, l: f64, a: f64, b: f64) {
        let lab = rgb.as_lab().unwrap();
        assert_close(lab.l, l, 0.5);
        assert_close(lab.a, a, 0.5);
        assert_close(lab.b, b, 0.5);
    }

    #[test]
    fn test_identical_colors_have_zero_distance() {
        let rgb = RgbValue::from_u8(95, 135, 175);
        assert_close(delta_e_cie2000(rgb, rgb).unwrap(), 0.0, 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let orange = RgbValue::from_u8(255, 135, 0);
        let teal = RgbValue::from_u8(0, 128, 128);
        let forward = delta_e_cie2000(orange, teal).unwrap();
        let backward = delta_e_cie2000(teal, orange).unwrap();
        assert_close(forward, backward, 1e-6);
        assert!(forward > 10.0);
    }

    #[test]
    fn test_black_white_distance() {
        let black = RgbValue::from_u8(0, 0, 0);
        let white = RgbValue::from_u8(255, 255, 255);
        assert_close(delta_e_cie2000(black, white).unwrap(), 100.0, 0.5);
    }

    #[test]
    fn test_near_colors_are_closer_than_far_colors() {
        let grey_50 = RgbValue::from_u8(128, 128, 128);
        let grey_54 = RgbValue::from_u8(138, 138, 138);
        let red = RgbValue::from_u8(255, 0, 0);
        let near = delta_e_cie2000(grey_50, grey_54).unwrap();
        let far = delta_e_cie2000(grey_50, red).unwrap();
        assert!(near < far);
    }
}

#[cfg(all(test, not(feature = "lab")))]
mod tests_without_lab {
    use super::*;
    use crate::XtermColorError;

    #[test]
    fn test_lab_functions_fail_with_descriptive_error() {
        let rgb = RgbValue::from_u8(1, 2, 3);
        assert!(!HAS_LAB_SUPPORT);
        assert!(matches!(
            rgb.as_lab(),
            Err(XtermColorError::LabSupportNotInstalled)
        ));
        assert!(matches!(
            delta_e_cie2000(rgb, rgb),
            Err(XtermColorError::LabSupportNotInstalled)
        ));
        assert!(matches!(
            LabValue::default().delta_e_cie2000(&LabValue::default()),
            Err(XtermColorError::LabSupportNotInstalled)
        ));
    }
}
