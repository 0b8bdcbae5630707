// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RgbValue;
use crate::XTERM_256_COLOR_TABLE;

/// Palette entries below this index are the 16 "system" colors, which terminals
/// commonly re-theme, so grayscale degradation never picks them.
pub const FIRST_EXTENDED_INDEX: u8 = 16;

pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of the color in the xterm-256 palette that is closest to the
    /// `self` color (Euclidean distance in RGB). Ties go to the lower index.
    fn as_xterm_index(&self) -> u8 { convert_rgb_into_xterm_index(self.as_rgb()) }

    /// Returns the index of the closest shade in the grayscale part of the palette
    /// (16, 232..=255, 231) approximating the `self` color.
    fn as_grayscale_index(&self) -> u8 { convert_rgb_into_grayscale_index(self.as_rgb()) }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }
}

#[must_use]
pub fn convert_rgb_into_xterm_index(rgb: RgbValue) -> u8 {
    let distance = |other: RgbValue| {
        i32::from(rgb.red).abs_diff(i32::from(other.red)).pow(2)
            + i32::from(rgb.green).abs_diff(i32::from(other.green)).pow(2)
            + i32::from(rgb.blue).abs_diff(i32::from(other.blue)).pow(2)
    };

    XTERM_256_COLOR_TABLE
        .iter()
        .min_by_key(|entry| distance(entry.rgb))
        .map_or(0, |entry| entry.index)
}

#[must_use]
pub fn convert_rgb_into_grayscale_index(rgb: RgbValue) -> u8 {
    let gray = convert_rgb_into_gray_level(rgb);

    XTERM_256_COLOR_TABLE
        .iter()
        .filter(|entry| entry.index >= FIRST_EXTENDED_INDEX && entry.rgb.is_greyscale())
        .min_by_key(|entry| entry.rgb.red.abs_diff(gray))
        .map_or(FIRST_EXTENDED_INDEX, |entry| entry.index)
}

/// Gamma corrected luma.
///
/// More info: <https://en.wikipedia.org/wiki/Grayscale#Converting_color_to_grayscale>
#[must_use]
pub fn convert_rgb_into_gray_level(rgb: RgbValue) -> u8 {
    fn srgb_to_linear(intensity: f64) -> f64 {
        if intensity < 0.04045 {
            intensity / 12.92
        } else {
            ((intensity + 0.055) / 1.055).powf(2.4)
        }
    }

    fn linear_to_srgb(intensity: f64) -> f64 {
        if intensity <= 0.003_130_8 {
            12.92 * intensity
        } else {
            1.055 * intensity.powf(1.0 / 2.4) - 0.055
        }
    }

    let (red, green, blue) = rgb.as_unit_rgb();
    let gray_linear = srgb_to_linear(red) * 0.299
        + srgb_to_linear(green) * 0.587
        + srgb_to_linear(blue) * 0.114;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let it = (linear_to_srgb(gray_linear).clamp(0.0, 1.0) * 255.0).round() as u8;
    it
}
