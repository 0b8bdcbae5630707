// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use std::fmt::{Display, Formatter, Result};

/// The subset of SGR (select graphic rendition) commands that this crate emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

pub mod sgr_code_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    /// Parameter that selects the foreground color in an extended color command.
    pub const CMDNUM_FOREGROUND: u8 = 38;
    /// Parameter that selects the background color in an extended color command.
    pub const CMDNUM_BACKGROUND: u8 = 48;

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}{CMDNUM_FOREGROUND};5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}{CMDNUM_BACKGROUND};5;{index}{SGR}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SgrCode;

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn fg_color_ansi256() {
        let sgr_code = SgrCode::ForegroundAnsi256(150);
        assert_eq!(sgr_code.to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        let sgr_code = SgrCode::BackgroundAnsi256(150);
        assert_eq!(sgr_code.to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn lowest_and_highest_index() {
        assert_eq!(SgrCode::ForegroundAnsi256(0).to_string(), "\x1b[38;5;0m");
        assert_eq!(SgrCode::BackgroundAnsi256(255).to_string(), "\x1b[48;5;255m");
    }
}
