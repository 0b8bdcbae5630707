// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit) color representation. Every xterm-256 color has one, and all the
//! derived attributes (HSV, brightness, Lab) are pure functions of it.

use std::fmt::{Display, Formatter};

use super::{HsvValue, LabValue};
use crate::{XtermColorError, XtermResult};

/// Perceived brightness at or above this value counts as "bright".
pub const BRIGHTNESS_THRESHOLD: f64 = 0.5;

/// Represents a color in RGB (24-bit) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    fn from(value: u32) -> Self { Self::from_packed(value) }
}

impl From<RgbValue> for u32 {
    fn from(value: RgbValue) -> Self { value.to_packed() }
}

/// Formats as `#rrggbb`.
impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.to_packed())
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Unpacks a `0xRRGGBB` value. Bits above the lowest 24 are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }

    #[must_use]
    pub const fn to_packed(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`XtermColorError::InvalidHexColor`] if the input is not six hex digits.
    pub fn try_from_hex_color(input: &str) -> XtermResult<RgbValue> {
        let invalid = || XtermColorError::InvalidHexColor {
            input: input.to_string(),
        };

        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.chars().all(|it| it.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_packed)
            .map_err(|_| invalid())
    }

    /// Channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn as_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    #[must_use]
    pub fn as_hsv(&self) -> HsvValue { HsvValue::from(*self) }

    /// Perceived brightness, according to the HSP color model. The result is in
    /// `0.0..=1.0`.
    ///
    /// More info: <https://alienryderflex.com/hsp.html>
    #[must_use]
    pub fn perceived_brightness(&self) -> f64 {
        let (red, green, blue) = self.as_unit_rgb();
        (0.299 * red.powi(2) + 0.587 * green.powi(2) + 0.114 * blue.powi(2)).sqrt()
    }

    /// A color is greyscale when its HSV saturation is zero, ie: all channels match.
    #[must_use]
    pub const fn is_greyscale(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    #[must_use]
    pub fn is_bright(&self) -> bool { self.perceived_brightness() >= BRIGHTNESS_THRESHOLD }

    #[must_use]
    pub fn is_dark(&self) -> bool { !self.is_bright() }

    /// Converts to CIE Lab (D65).
    ///
    /// # Errors
    ///
    /// Returns [`XtermColorError::LabSupportNotInstalled`] without the `lab` feature.
    pub fn as_lab(&self) -> XtermResult<LabValue> { LabValue::try_from_rgb(*self) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test_case(0x800000, (128, 0, 0))]
    #[test_case(0x00d787, (0, 215, 135))]
    #[test_case(0x5f00ff, (95, 0, 255))]
    #[test_case(0xffffff, (255, 255, 255))]
    fn test_from_packed(packed: u32, expected: (u8, u8, u8)) {
        let value = RgbValue::from(packed);
        assert_eq!(value, RgbValue::from(expected));
        assert_eq!(u32::from(value), packed);
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbValue::try_from_hex_color("#ff8700").unwrap();
            assert_eq!(value, RgbValue::from_u8(255, 135, 0));

            let value = RgbValue::try_from_hex_color("5FAFD7").unwrap();
            assert_eq!(value, RgbValue::from_u8(95, 175, 215));
        }

        // Invalid.
        {
            for input in ["#ff000", "#ff00000", "#gggggg", "", "#+12345"] {
                let result = RgbValue::try_from_hex_color(input);
                assert!(
                    matches!(result, Err(XtermColorError::InvalidHexColor { .. })),
                    "{input:?} should not parse"
                );
            }
        }
    }

    #[test]
    fn test_display_as_hex() {
        assert_eq!(RgbValue::from_u8(0, 95, 175).to_string(), "#005faf");
    }

    #[test_case(RgbValue::from_u8(0, 0, 0), 0.0)]
    #[test_case(RgbValue::from_u8(255, 255, 255), 1.0)]
    #[test_case(RgbValue::from_u8(255, 0, 0), 0.299_f64.sqrt())]
    fn test_perceived_brightness(rgb: RgbValue, expected: f64) {
        assert!((rgb.perceived_brightness() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bright_and_dark_are_complementary() {
        let yellow = RgbValue::from_u8(255, 255, 0);
        assert!(yellow.is_bright());
        assert!(!yellow.is_dark());

        let navy = RgbValue::from_u8(0, 0, 128);
        assert!(navy.is_dark());
        assert!(!navy.is_bright());
    }

    #[test]
    fn test_is_greyscale() {
        assert!(RgbValue::from_u8(128, 128, 128).is_greyscale());
        assert!(RgbValue::from_u8(0, 0, 0).is_greyscale());
        assert!(!RgbValue::from_u8(128, 128, 129).is_greyscale());
    }
}
