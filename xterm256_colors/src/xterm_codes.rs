// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two color namespaces, [`Fore256`] and [`Back256`].
//!
//! The named constants (`Fore256::MAROON`, `Back256::GREY93`, ...) are generated in
//! [`crate::color_table`]. Runtime lookups, and the curated color lists, come from the
//! [`XtermCodes`] trait.

use crate::{ColorLayer, DEFAULT_DIFFERENTIATED_COLOR_CODES, RgbValue, TransformColor,
            XTERM_256_COLOR_TABLE, XtermColor, XtermResult, find_entry_by_code,
            find_entry_by_name};

/// Foreground colors. `Fore256::DARKORANGE.apply("text")` paints the text orange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fore256;

/// Background colors. `Back256::DARKORANGE.apply("text")` paints the cells behind the
/// text orange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Back256;

/// Key for [`XtermCodes::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey<'a> {
    Name(&'a str),
    Code(usize),
}

impl<'a> From<&'a str> for ColorKey<'a> {
    fn from(name: &'a str) -> Self { ColorKey::Name(name) }
}

impl<'a> From<&'a String> for ColorKey<'a> {
    fn from(name: &'a String) -> Self { ColorKey::Name(name.as_str()) }
}

impl From<u8> for ColorKey<'_> {
    fn from(code: u8) -> Self { ColorKey::Code(usize::from(code)) }
}

impl From<usize> for ColorKey<'_> {
    fn from(code: usize) -> Self { ColorKey::Code(code) }
}

/// Lookups shared by [`Fore256`] and [`Back256`]. They only differ in
/// [`XtermCodes::LAYER`].
pub trait XtermCodes {
    const LAYER: ColorLayer;

    /// Exact, case sensitive match, eg: `"DARKORANGE"`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XtermColorError::UnknownColorName`] if there is no such color.
    fn get(name: &str) -> XtermResult<XtermColor> {
        let entry = find_entry_by_name(name)?;
        Ok(XtermColor::new(entry.index, Self::LAYER))
    }

    /// # Errors
    ///
    /// Returns [`crate::XtermColorError::UnknownColorCode`] if `code` is greater than
    /// 255.
    fn by_code(code: usize) -> XtermResult<XtermColor> {
        let entry = find_entry_by_code(code)?;
        Ok(XtermColor::new(entry.index, Self::LAYER))
    }

    /// Dispatches to [`Self::get`] or [`Self::by_code`].
    ///
    /// # Errors
    ///
    /// See [`Self::get`] and [`Self::by_code`].
    fn lookup<'a>(key: impl Into<ColorKey<'a>>) -> XtermResult<XtermColor> {
        match key.into() {
            ColorKey::Name(name) => Self::get(name),
            ColorKey::Code(code) => Self::by_code(code),
        }
    }

    /// The palette color closest to `rgb`.
    fn nearest(rgb: impl Into<RgbValue>) -> XtermColor {
        XtermColor::new(rgb.into().as_xterm_index(), Self::LAYER)
    }

    /// All 256 colors, ordered by code.
    fn all_colors() -> Vec<XtermColor> {
        XTERM_256_COLOR_TABLE
            .iter()
            .map(|entry| XtermColor::new(entry.index, Self::LAYER))
            .collect()
    }

    fn bright_colors() -> Vec<XtermColor> {
        Self::all_colors()
            .into_iter()
            .filter(XtermColor::is_bright)
            .collect()
    }

    fn dark_colors() -> Vec<XtermColor> {
        Self::all_colors()
            .into_iter()
            .filter(XtermColor::is_dark)
            .collect()
    }

    /// A curated list of visually distinguishable colors. It contains `PURPLE` twice.
    fn differentiated_colors() -> Vec<XtermColor> {
        DEFAULT_DIFFERENTIATED_COLOR_CODES
            .iter()
            .map(|code| XtermColor::new(*code, Self::LAYER))
            .collect()
    }

    fn len() -> usize { XTERM_256_COLOR_TABLE.len() }
}

impl XtermCodes for Fore256 {
    const LAYER: ColorLayer = ColorLayer::Foreground;
}

impl XtermCodes for Back256 {
    const LAYER: ColorLayer = ColorLayer::Background;
}
