// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helpers to eyeball colors in a terminal. Every function writes to any
//! [`std::io::Write`], and has a `*_to_stdout` twin. Output honors
//! [`crate::global_color_support`], so piping it to a file gives plain text.

use std::io::Write;

use crate::{Back256, ColorLayer, Fore256, XtermCodes, XtermColor, XtermResult};

/// Width of the swatch in front of each [`print_colors`] line.
pub const DEFAULT_SWATCH_WIDTH: usize = 3;

/// Width of a [`print_color_table`] cell.
pub const TABLE_CELL_WIDTH: usize = 4;

const TABLE_SWATCH_CHAR: char = '▇';

/// Writes a swatch, the code, and the name of each color, one per line, eg:
/// `███    1 MAROON`. The label is painted with the color as well. Bright background
/// colors get a black label, so it stays readable.
///
/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing fails.
pub fn print_colors(
    writer: &mut impl Write,
    colors: impl IntoIterator<Item = XtermColor>,
) -> XtermResult<()> {
    for color in colors {
        let mut label = format!("{:>4} {}", color.code(), color.name());
        if color.is_background() && color.is_bright() {
            label = Fore256::BLACK.paint(label).to_string();
        }
        writeln!(
            writer,
            "{} {}",
            color.swatch(DEFAULT_SWATCH_WIDTH, None),
            color.paint(label)
        )?;
    }
    Ok(())
}

/// [`print_colors`] for all 256 colors on `layer`.
///
/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing fails.
pub fn print_all_colors(writer: &mut impl Write, layer: ColorLayer) -> XtermResult<()> {
    let colors = match layer {
        ColorLayer::Foreground => Fore256::all_colors(),
        ColorLayer::Background => Back256::all_colors(),
    };
    print_colors(writer, colors)
}

/// [`print_colors`] for the curated list of differentiated colors on `layer`.
///
/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing fails.
pub fn print_differentiated_colors(
    writer: &mut impl Write,
    layer: ColorLayer,
) -> XtermResult<()> {
    let colors = match layer {
        ColorLayer::Foreground => Fore256::differentiated_colors(),
        ColorLayer::Background => Back256::differentiated_colors(),
    };
    print_colors(writer, colors)
}

/// Writes a table with a swatch pair for every combination of `colors`, to check how
/// they look next to each other. `sort` orders rows and columns by code, otherwise the
/// given order is kept.
///
/// ```text
///         ▇▇▇▇▇▇▇▇
///          1   4
/// ▇▇▇▇ 1       ▇▇
/// ▇▇▇▇ 4   ▇▇
/// ```
///
/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing fails.
pub fn print_color_table(
    writer: &mut impl Write,
    colors: impl IntoIterator<Item = XtermColor>,
    sort: bool,
) -> XtermResult<()> {
    let mut colors: Vec<XtermColor> = colors.into_iter().collect();
    if sort {
        colors.sort_by_key(XtermColor::code);
    }

    let swatch = |color: &XtermColor, count: usize| color.swatch(count, Some(TABLE_SWATCH_CHAR));

    // Header.
    {
        write_text_cell(writer, "")?;
        write_text_cell(writer, "")?;
        for color in &colors {
            write!(writer, "{}", swatch(color, TABLE_CELL_WIDTH))?;
        }
        writeln!(writer)?;

        write_text_cell(writer, "")?;
        write_text_cell(writer, "")?;
        for color in &colors {
            write_text_cell(writer, &color.code().to_string())?;
        }
        writeln!(writer)?;
    }

    // Body.
    for row_color in &colors {
        write!(writer, "{}", swatch(row_color, TABLE_CELL_WIDTH))?;
        write_text_cell(writer, &row_color.code().to_string())?;
        for col_color in &colors {
            if row_color == col_color {
                write_text_cell(writer, "")?;
            } else {
                write!(writer, " {}{} ", swatch(row_color, 1), swatch(col_color, 1))?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn write_text_cell(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    write!(writer, "{text:^TABLE_CELL_WIDTH$}")
}

/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing to stdout fails.
pub fn print_colors_to_stdout(colors: impl IntoIterator<Item = XtermColor>) -> XtermResult<()> {
    print_colors(&mut std::io::stdout().lock(), colors)
}

/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing to stdout fails.
pub fn print_all_colors_to_stdout(layer: ColorLayer) -> XtermResult<()> {
    print_all_colors(&mut std::io::stdout().lock(), layer)
}

/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing to stdout fails.
pub fn print_differentiated_colors_to_stdout(layer: ColorLayer) -> XtermResult<()> {
    print_differentiated_colors(&mut std::io::stdout().lock(), layer)
}

/// # Errors
///
/// Returns [`crate::XtermColorError::Io`] if writing to stdout fails.
pub fn print_color_table_to_stdout(
    colors: impl IntoIterator<Item = XtermColor>,
    sort: bool,
) -> XtermResult<()> {
    print_color_table(&mut std::io::stdout().lock(), colors, sort)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{ColorSupport, XtermColorError, global_color_support};

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> XtermResult<()>) -> String {
        let mut acc = Vec::new();
        f(&mut acc).unwrap();
        String::from_utf8(acc).unwrap()
    }

    #[serial]
    #[test]
    fn test_print_colors_plain() {
        global_color_support::set_override(ColorSupport::NoColor);
        let output = capture(|w| print_colors(w, [Fore256::MAROON, Back256::GREY93]));
        assert_eq!(output, "███    1 MAROON\n     255 GREY93\n");
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn test_print_colors_bright_background_gets_black_label() {
        global_color_support::set_override(ColorSupport::Ansi256);
        let output = capture(|w| print_colors(w, [Back256::YELLOW1]));
        assert_eq!(
            output,
            "\x1b[48;5;226m   \x1b[0m \
             \x1b[48;5;226m\x1b[38;5;0m 226 YELLOW1\x1b[0m\x1b[0m\n"
        );

        let output = capture(|w| print_colors(w, [Back256::NAVY]));
        assert_eq!(
            output,
            "\x1b[48;5;4m   \x1b[0m \x1b[48;5;4m   4 NAVY\x1b[0m\n"
        );
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn test_print_all_and_differentiated_colors() {
        global_color_support::set_override(ColorSupport::NoColor);
        let all = capture(|w| print_all_colors(w, ColorLayer::Foreground));
        assert_eq!(all.lines().count(), 256);
        assert_eq!(all.lines().last(), Some("███  255 GREY93"));

        let differentiated = capture(|w| print_differentiated_colors(w, ColorLayer::Background));
        assert_eq!(differentiated.lines().count(), 40);
        assert_eq!(differentiated.lines().next(), Some("      12 BLUE"));
        global_color_support::clear_override();
    }

    #[serial]
    #[test]
    fn test_print_color_table_plain() {
        global_color_support::set_override(ColorSupport::NoColor);
        let output = capture(|w| print_color_table(w, [Fore256::NAVY, Fore256::MAROON], true));
        let expected = [
            "        ▇▇▇▇▇▇▇▇",
            "         1   4  ",
            "▇▇▇▇ 1       ▇▇ ",
            "▇▇▇▇ 4   ▇▇     ",
        ]
        .map(|line| format!("{line}\n"))
        .concat();
        assert_eq!(output, expected);

        let unsorted = capture(|w| print_color_table(w, [Fore256::NAVY, Fore256::MAROON], false));
        assert_eq!(unsorted.lines().nth(1), Some("         4   1  "));
        global_color_support::clear_override();
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let result = print_colors(&mut Broken, [Fore256::RED1]);
        assert!(matches!(result, Err(XtermColorError::Io(_))));
    }
}
