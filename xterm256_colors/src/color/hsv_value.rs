// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSV (hue, saturation, value) color representation.
//!
//! More info: <https://en.wikipedia.org/wiki/HSL_and_HSV>

use std::f64::consts::TAU;

use super::RgbValue;

/// All three components are in `0.0..=1.0`. Hue is a fraction of a full turn, so `0.0`
/// and `1.0` are both red.
#[derive(Clone, PartialEq, Copy, Debug, Default)]
pub struct HsvValue {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl From<RgbValue> for HsvValue {
    fn from(rgb: RgbValue) -> Self {
        let (red, green, blue) = rgb.as_unit_rgb();
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let range = max - min;

        if rgb.is_greyscale() {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                value: max,
            };
        }

        let red_c = (max - red) / range;
        let green_c = (max - green) / range;
        let blue_c = (max - blue) / range;

        let hue = if rgb.red >= rgb.green && rgb.red >= rgb.blue {
            blue_c - green_c
        } else if rgb.green >= rgb.blue {
            2.0 + red_c - blue_c
        } else {
            4.0 + green_c - red_c
        };

        Self {
            hue: (hue / 6.0).rem_euclid(1.0),
            saturation: range / max,
            value: max,
        }
    }
}

impl From<HsvValue> for RgbValue {
    fn from(hsv: HsvValue) -> Self { hsv.as_rgb() }
}

impl HsvValue {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Converts back to RGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn as_rgb(&self) -> RgbValue {
        let Self {
            hue,
            saturation,
            value,
        } = *self;

        if saturation <= 0.0 {
            let it = unit_to_u8(value);
            return RgbValue::from_u8(it, it, it);
        }

        let sector = (hue.rem_euclid(1.0) * 6.0).floor();
        let fraction = hue.rem_euclid(1.0) * 6.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (red, green, blue) = match sector as u8 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        RgbValue::from_u8(unit_to_u8(red), unit_to_u8(green), unit_to_u8(blue))
    }

    /// Position in the HSV cone: hue is the angle, saturation scaled by value is the
    /// radius, and value is the height.
    #[must_use]
    pub fn as_cone_coordinates(&self) -> (f64, f64, f64) {
        let radius = self.saturation * self.value;
        let angle = self.hue * TAU;
        (radius * angle.cos(), radius * angle.sin(), self.value)
    }
}

/// Euclidean distance between two colors in the HSV cone. Ranges from `0.0` to `2.0`.
/// This does not need the `lab` feature, so it is the fallback metric for
/// [`crate::find_differentiated_colors_by`].
#[must_use]
pub fn hsv_distance(first: HsvValue, second: HsvValue) -> f64 {
    let (x1, y1, z1) = first.as_cone_coordinates();
    let (x2, y2, z2) = second.as_cone_coordinates();
    ((x1 - x2).powi(2) + (y1 - y2).powi(2) + (z1 - z2).powi(2)).sqrt()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f64) -> u8 { (value.clamp(0.0, 1.0) * 255.0).round() as u8 }
