// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # xterm256_colors
//!
//! Human readable names for all 256 xterm colors, and helpers to style text with them.
//!
//! There are two namespaces, [`Fore256`] and [`Back256`]. Each one has an associated
//! constant for every color in the xterm-256 palette. Calling [`XtermColor::apply`]
//! wraps text in the matching SGR sequence and a reset:
//!
//! ```rust
//! use xterm256_colors::*;
//!
//! let text = Fore256::MAROON.apply("hello");
//! assert_eq!(text, "\x1b[38;5;1mhello\x1b[0m");
//!
//! let text = Back256::GREY93.apply("world");
//! assert_eq!(text, "\x1b[48;5;255mworld\x1b[0m");
//! ```
//!
//! Colors can also be looked up at runtime by name or by code:
//!
//! ```rust
//! use xterm256_colors::*;
//!
//! let color = Fore256::get("DARKORANGE").unwrap();
//! assert_eq!(color.code(), 208);
//!
//! let color = Back256::lookup(42_u8).unwrap();
//! assert_eq!(color.name(), "SPRINGGREEN2");
//!
//! assert!(Fore256::get("NOT_A_COLOR").is_err());
//! assert!(Fore256::by_code(256).is_err());
//! ```
//!
//! ## Color math
//!
//! Every color knows its [`RgbValue`], and from that its [`HsvValue`], its perceived
//! brightness (HSP model), and whether it is greyscale, bright, or dark. With the `lab`
//! feature (on by default) colors can also be converted to CIE Lab, and compared with
//! Delta-E 2000. Without it, the Lab functions return
//! [`XtermColorError::LabSupportNotInstalled`] and everything else keeps working.
//!
//! ## Differentiated colors
//!
//! [`find_differentiated_colors`] greedily picks `n` colors that are as far apart from
//! each other as possible, which is handy for colorizing identifiers.
//!
//! ## Output
//!
//! [`XtermColor::apply`] always emits escape sequences. [`XtermColor::paint`] returns an
//! [`XtermStyledText`] whose [`Display`](std::fmt::Display) implementation honors the
//! terminal's [`ColorSupport`] (see [`global_color_support`]). The `print_*` helpers in
//! [`print_colors`](mod@print_colors) use it to write swatches and comparison tables.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi_escape_codes;
pub mod color;
pub mod color_table;
pub mod detect_color_support;
pub mod differentiate;
pub mod error;
pub mod print_colors;
pub mod xterm_codes;
pub mod xterm_color;
pub mod xterm_styled_text;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_table::*;
pub use detect_color_support::*;
pub use differentiate::*;
pub use error::*;
pub use print_colors::*;
pub use xterm_codes::*;
pub use xterm_color::*;
pub use xterm_styled_text::*;
