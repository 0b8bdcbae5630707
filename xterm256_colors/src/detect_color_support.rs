// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decides whether [`crate::XtermStyledText`] emits escape sequences.
//!
//! Detection looks at the environment, and the result is cached, so it runs at most once
//! per process (until [`global_color_support::clear_cache`] is called). An override set
//! with [`global_color_support::set_override`] wins over both.
//!
//! ```rust
//! use xterm256_colors::{ColorSupport, Fore256, global_color_support};
//!
//! global_color_support::set_override(ColorSupport::NoColor);
//! assert_eq!(Fore256::RED1.paint("plain").to_string(), "plain");
//! global_color_support::clear_override();
//! ```

use std::{env,
          io::IsTerminal,
          sync::atomic::{AtomicI8, Ordering}};

/// Global state which is used to:
/// 1. Override the color support.
/// 2. Memoize the result of [`examine_env_vars_to_determine_color_support`].
///
/// Order of precedence in [`global_color_support::detect`]: override, then cache, then
/// detection (which fills the cache).
pub mod global_color_support {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Explicit override, highest priority.
    static COLOR_SUPPORT_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    /// Memoized detection result.
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// This is the main function that is used to determine whether color is supported.
    ///
    /// 1. If [`set_override`] was called, return that value.
    /// 2. If detection already ran, return the cached result.
    /// 3. Otherwise detect from the environment (for stdout), cache it, and return it.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        set_cached(detected);
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🖥️ Detect and cache color support",
            color_support = ?detected
        );
        detected
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_GLOBAL.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_GLOBAL.store(NOT_SET_VALUE, Ordering::Release); }

    /// Forces re-detection on the next call to [`detect()`].
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if detection has not run yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    pub fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }

    /// # Errors
    ///
    /// Returns `Err(())` if no override value has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_GLOBAL.load(Ordering::Acquire))
    }
}

/// Determine whether color is supported heuristically, based on the environment
/// variables and whether `stream` is a terminal. Use [`global_color_support::detect`]
/// instead of calling this directly, since it caches the result.
///
/// 1. `NO_COLOR` (set to anything but `0`), `TERM=dumb`, or a stream that is not a tty
///    (unless `IGNORE_IS_TERMINAL` is set to anything but `0`) disables color.
/// 2. `COLORTERM`, a color capable `TERM`, `CLICOLOR` (not `0`), or running in CI
///    enables color.
/// 3. Anything else disables color.
///
/// Terminals that advertise truecolor also support the 8-bit palette, so they map to
/// [`ColorSupport::Ansi256`].
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    if helpers::env_no_color()
        || env::var("TERM").is_ok_and(|v| v == "dumb")
        || !(helpers::is_a_tty(stream)
            || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return ColorSupport::NoColor;
    }

    if env::consts::OS == "windows" {
        return ColorSupport::Ansi256;
    }

    if env::var("COLORTERM").is_ok()
        || env::var("TERM").is_ok_and(|term| helpers::check_ansi_color(&term))
        || env::var("CLICOLOR").is_ok_and(|v| v != "0")
        || is_ci::uncached()
    {
        return ColorSupport::Ansi256;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// How [`crate::XtermStyledText`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// Emit the 8-bit color escape sequences as is.
    Ansi256,
    /// Emit escape sequences, but swap each color for its nearest grey.
    Grayscale,
    /// Emit only the text.
    NoColor,
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                3 => Ok(super::ColorSupport::NoColor),
                4 => Ok(super::ColorSupport::Grayscale),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256   => 1,
                super::ColorSupport::NoColor   => 3,
                super::ColorSupport::Grayscale => 4,
            }
        }
    }
}

mod helpers {
    use super::{IsTerminal, Stream, env};

    pub fn is_a_tty(stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }

    pub fn env_no_color() -> bool { env::var("NO_COLOR").is_ok_and(|v| v != "0") }
}
