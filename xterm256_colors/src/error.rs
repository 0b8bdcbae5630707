// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`XtermColorError`]. Since the error type
/// implements [`miette::Diagnostic`], it converts into a [`miette::Report`] with `?`.
pub type XtermResult<T> = core::result::Result<T, XtermColorError>;

/// Everything that can go wrong in this crate.
#[non_exhaustive]
#[derive(thiserror::Error, miette::Diagnostic, Debug)]
pub enum XtermColorError {
    #[error("🎨 Unknown xterm-256 color name: '{name}'")]
    #[diagnostic(
        code(xterm256_colors::unknown_color_name),
        help("Names are upper case, eg: 'DARKORANGE', 'GREY93', 'BLUE3_1'")
    )]
    UnknownColorName { name: String },

    #[error("🔢 Unknown xterm-256 color code: {code}")]
    #[diagnostic(
        code(xterm256_colors::unknown_color_code),
        help("Color codes are in the range 0..=255")
    )]
    UnknownColorCode { code: usize },

    #[error("#️⃣ Invalid hex color: '{input}'")]
    #[diagnostic(
        code(xterm256_colors::invalid_hex_color),
        help("Use the '#rrggbb' format, eg: '#ff8700'")
    )]
    InvalidHexColor { input: String },

    #[error(
        "🧪 Lab color support is not installed, rebuild with the `lab` feature \
         (which pulls in the `palette` crate) to use this function"
    )]
    #[diagnostic(
        code(xterm256_colors::lab_support_not_installed),
        help("Add `features = [\"lab\"]` to the xterm256_colors dependency")
    )]
    LabSupportNotInstalled,

    #[error("📏 No distance between color codes {first} and {second} in the distance matrix")]
    #[diagnostic(
        code(xterm256_colors::missing_distance),
        help("Build the matrix with `calculate_distance_matrix` from the same candidates")
    )]
    MissingDistance { first: u8, second: u8 },

    #[error("🔍 Requested {requested} differentiated colors but only {found} qualify")]
    #[diagnostic(
        code(xterm256_colors::not_enough_candidates),
        help("Pass more candidates, ask for fewer colors, or lower `min_dist`")
    )]
    NotEnoughCandidates { requested: usize, found: usize },

    #[error("🖨️ Could not write color output")]
    #[diagnostic(code(xterm256_colors::io))]
    Io(#[from] std::io::Error),
}

/// Returns an error if this crate was built without the `lab` feature.
///
/// # Errors
///
/// Returns [`XtermColorError::LabSupportNotInstalled`] when the `palette` dependency is
/// not compiled in.
pub fn require_lab_support() -> XtermResult<()> {
    if crate::HAS_LAB_SUPPORT {
        Ok(())
    } else {
        Err(XtermColorError::LabSupportNotInstalled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_message_contains_name() {
        let error = XtermColorError::UnknownColorName {
            name: "PUCE".into(),
        };
        assert!(error.to_string().contains("'PUCE'"));
    }

    #[test]
    fn converts_into_miette_report() {
        fn fails() -> miette::Result<()> {
            Err(XtermColorError::UnknownColorCode { code: 300 })?;
            Ok(())
        }
        let report = fails().unwrap_err();
        assert!(report.to_string().contains("300"));
    }

    #[test]
    fn lab_support_message_names_the_feature() {
        let message = XtermColorError::LabSupportNotInstalled.to_string();
        assert!(message.contains("`lab` feature"));
        assert!(message.contains("palette"));
    }

    #[cfg(feature = "lab")]
    #[test]
    fn require_lab_support_passes_with_feature() {
        assert!(require_lab_support().is_ok());
    }

    #[cfg(not(feature = "lab"))]
    #[test]
    fn require_lab_support_fails_without_feature() {
        assert!(matches!(
            require_lab_support(),
            Err(XtermColorError::LabSupportNotInstalled)
        ));
    }
}
