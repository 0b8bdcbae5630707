// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Display, Formatter, Result}};

use smallstr::SmallString;

use crate::{ColorSupport, SgrCode, XtermColor, global_color_support};

/// Text and the [`XtermColor`] to paint it with. Created by [`XtermColor::paint`] and
/// [`XtermColor::swatch`].
///
/// Unlike [`XtermColor::apply`], nothing is formatted until it is displayed, and the
/// output depends on [`global_color_support::detect`]:
/// - [`ColorSupport::Ansi256`]: color prefix, text, reset.
/// - [`ColorSupport::Grayscale`]: the same, with the nearest grey in place of the color.
/// - [`ColorSupport::NoColor`]: just the text.
///
/// # Example usage:
///
/// ```rust
/// use xterm256_colors::*;
///
/// let styled = Fore256::HOTPINK.paint("hello");
/// assert_eq!(styled.render(ColorSupport::Ansi256), "\x1b[38;5;205mhello\x1b[0m");
/// assert_eq!(styled.render(ColorSupport::NoColor), "hello");
/// println!("{styled}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XtermStyledText<'a> {
    pub text: Cow<'a, str>,
    pub color: XtermColor,
}

pub mod sizing {
    /// Most labels and swatches fit in this many bytes, escape sequences included.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
}

mod xterm_styled_text_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a> XtermStyledText<'a> {
        pub fn new(text: impl Into<Cow<'a, str>>, color: XtermColor) -> Self {
            Self {
                text: text.into(),
                color,
            }
        }

        /// Renders for the given `support`, ignoring the global setting.
        #[must_use]
        pub fn render(&self, support: ColorSupport) -> String {
            let mut acc = String::new();
            // Writing to a String can't fail.
            let _ = self.write_to(&mut acc, support);
            acc
        }

        pub fn println(&self) {
            println!("{self}");
        }

        /// This is different than the [Display] trait implementation, because it doesn't
        /// allocate a new [String], but instead allocates an inline buffer on the stack.
        /// If this buffer gets larger than [sizing::DEFAULT_STRING_STORAGE_SIZE], it will
        /// spill to the heap.
        #[must_use]
        pub fn to_small_str(&self) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            let mut acc = SmallString::new();
            // Writing to a SmallString can't fail.
            let _ = self.write_to(&mut acc, global_color_support::detect());
            acc
        }

        pub(super) fn write_to(
            &self,
            f: &mut impl std::fmt::Write,
            support: ColorSupport,
        ) -> Result {
            let color = match support {
                ColorSupport::NoColor => return f.write_str(&self.text),
                ColorSupport::Ansi256 => self.color,
                ColorSupport::Grayscale => self.color.as_grayscale(),
            };
            write!(f, "{}{}{}", color.sgr_code(), self.text, SgrCode::Reset)
        }
    }
}

mod display_trait_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Display for XtermStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            self.write_to(f, global_color_support::detect())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use crate::*;

    #[serial]
    #[test]
    fn test_display_ansi256() {
        global_color_support::set_override(ColorSupport::Ansi256);
        assert_eq!(
            Fore256::RED1.paint("Hello").to_string(),
            "\x1b[38;5;196mHello\x1b[0m"
        );
        assert_eq!(
            Back256::RED1.paint("Hello").to_string(),
            "\x1b[48;5;196mHello\x1b[0m"
        );
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn test_display_grayscale() {
        global_color_support::set_override(ColorSupport::Grayscale);

        // Already grey, so unchanged.
        assert_eq!(
            Fore256::GREY50.paint("World").to_string(),
            "\x1b[38;5;244mWorld\x1b[0m"
        );

        // Black maps onto the first grey past the system colors.
        assert_eq!(
            Back256::BLACK.paint("World").to_string(),
            "\x1b[48;5;16mWorld\x1b[0m"
        );
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn test_display_no_color() {
        global_color_support::set_override(ColorSupport::NoColor);
        assert_eq!(Fore256::RED1.paint("plain").to_string(), "plain");
        assert_eq!(Back256::RED1.swatch(3, None).to_string(), "   ");
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn test_to_small_str() {
        global_color_support::set_override(ColorSupport::Ansi256);
        let styled = Fore256::TEAL.paint("ok");
        assert_eq!(styled.to_small_str().as_str(), "\x1b[38;5;6mok\x1b[0m");
        assert!(!styled.to_small_str().spilled());
        global_color_support::clear_override();
    }

    #[test]
    fn test_render_ignores_global_setting() {
        let styled = Fore256::BLUE.swatch(2, Some('x'));
        assert_eq!(styled.render(ColorSupport::Ansi256), "\x1b[38;5;12mxx\x1b[0m");
        assert_eq!(styled.render(ColorSupport::NoColor), "xx");
    }

    #[test]
    fn test_swatch_default_fill() {
        assert_eq!(Fore256::BLUE.swatch(2, None).text, "██");
        assert_eq!(Back256::BLUE.swatch(2, None).text, "  ");
        assert_eq!(Back256::BLUE.swatch(0, None).text, "");
    }

    #[test]
    fn test_paint_borrows_or_owns() {
        let borrowed = Fore256::OLIVE.paint("text");
        assert!(matches!(borrowed.text, std::borrow::Cow::Borrowed(_)));
        let owned = Fore256::OLIVE.paint(String::from("text"));
        assert_eq!(borrowed, owned);
    }
}
