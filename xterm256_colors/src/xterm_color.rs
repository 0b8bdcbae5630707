// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Display, Formatter, Result}};

use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::{ColorEntry, HsvValue, LabValue, RgbValue, SgrCode, TransformColor,
            XtermResult, XtermStyledText, entry_for_code};

/// Which half of a cell a color paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum ColorLayer {
    Foreground,
    Background,
}

/// One of the 256 xterm colors, on a given [`ColorLayer`].
///
/// Its [`Display`] implementation only emits the escape sequence prefix, so it can be
/// interpolated into a format string and closed with [`XtermColor::reset`]:
///
/// ```rust
/// use xterm256_colors::*;
///
/// let line = format!("{}warning{}", Fore256::GOLD1, XtermColor::reset());
/// assert_eq!(line, "\x1b[38;5;220mwarning\x1b[0m");
/// assert_eq!(line, Fore256::GOLD1.apply("warning"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XtermColor {
    code: u8,
    layer: ColorLayer,
}

impl XtermColor {
    #[must_use]
    pub const fn new(code: u8, layer: ColorLayer) -> Self { Self { code, layer } }

    #[must_use]
    pub const fn code(&self) -> u8 { self.code }

    #[must_use]
    pub const fn layer(&self) -> ColorLayer { self.layer }

    #[must_use]
    pub const fn is_background(&self) -> bool {
        matches!(self.layer, ColorLayer::Background)
    }

    /// The same color on another layer.
    #[must_use]
    pub const fn with_layer(&self, layer: ColorLayer) -> Self { Self::new(self.code, layer) }

    #[must_use]
    pub fn entry(&self) -> &'static ColorEntry { entry_for_code(self.code) }

    #[must_use]
    pub fn name(&self) -> &'static str { self.entry().name }

    #[must_use]
    pub fn rgb(&self) -> RgbValue { self.entry().rgb }

    #[must_use]
    pub const fn sgr_code(&self) -> SgrCode {
        match self.layer {
            ColorLayer::Foreground => SgrCode::ForegroundAnsi256(self.code),
            ColorLayer::Background => SgrCode::BackgroundAnsi256(self.code),
        }
    }

    /// The sequence that ends any color, `ESC[0m`.
    #[must_use]
    pub const fn reset() -> SgrCode { SgrCode::Reset }

    /// Wraps `text` in this color's escape sequence and a reset. Always emits the
    /// escape sequences, regardless of [`crate::ColorSupport`]. Use [`Self::paint`] to
    /// honor it.
    pub fn apply(&self, text: impl AsRef<str>) -> String {
        format!("{}{}{}", self.sgr_code(), text.as_ref(), SgrCode::Reset)
    }

    /// Like [`Self::apply`] but lazy, and rendered according to
    /// [`crate::global_color_support::detect`] when displayed.
    pub fn paint<'a>(&self, text: impl Into<Cow<'a, str>>) -> XtermStyledText<'a> {
        XtermStyledText::new(text, *self)
    }

    /// `count` copies of `fill` painted with this color. When `fill` is `None`, a full
    /// block is used for foreground colors, and a space for background colors.
    #[must_use]
    pub fn swatch(&self, count: usize, fill: Option<char>) -> XtermStyledText<'static> {
        let fill = fill.unwrap_or(match self.layer {
            ColorLayer::Foreground => '█',
            ColorLayer::Background => ' ',
        });
        self.paint(fill.to_string().repeat(count))
    }

    /// Eg: `<XtermColor(001, 0x800000, 'MAROON', is_background=false)>`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "<XtermColor({:03}, 0x{:06x}, '{}', is_background={})>",
            self.code,
            self.rgb().to_packed(),
            self.name(),
            self.is_background()
        )
    }

    #[must_use]
    pub fn hsv(&self) -> HsvValue { self.rgb().as_hsv() }

    #[must_use]
    pub fn perceived_brightness(&self) -> f64 { self.rgb().perceived_brightness() }

    #[must_use]
    pub fn is_bright(&self) -> bool { self.rgb().is_bright() }

    #[must_use]
    pub fn is_dark(&self) -> bool { self.rgb().is_dark() }

    #[must_use]
    pub fn is_greyscale(&self) -> bool { self.rgb().is_greyscale() }

    /// # Errors
    ///
    /// Returns [`crate::XtermColorError::LabSupportNotInstalled`] without the `lab`
    /// feature.
    pub fn as_lab(&self) -> XtermResult<LabValue> { self.rgb().as_lab() }

    /// The nearest grey in the palette, on the same layer.
    #[must_use]
    pub fn as_grayscale(&self) -> Self { Self::new(self.as_grayscale_index(), self.layer) }
}

impl TransformColor for XtermColor {
    fn as_rgb(&self) -> RgbValue { self.rgb() }

    /// Several palette entries share an RGB value (eg: `BLACK` and `GREY0`), so the
    /// code is returned as is, rather than searched for.
    fn as_xterm_index(&self) -> u8 { self.code }
}

impl Display for XtermColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.sgr_code()) }
}
