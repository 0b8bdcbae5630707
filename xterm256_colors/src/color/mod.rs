// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`RgbValue`] (24-bit), [`HsvValue`] and [`LabValue`]
//! - **Abstraction**: [`TransformColor`] trait for mapping any color onto the xterm-256
//!   palette
//! - **Conversion logic**: RGB↔HSV, RGB→Lab, and the distance functions built on them
//!
//! [`LabValue`] conversions need the `lab` feature. Check [`HAS_LAB_SUPPORT`] at runtime.

// Attach.
mod hsv_value;
mod lab_value;
mod rgb_value;
mod transform_color;

// Re-export.
pub use hsv_value::*;
pub use lab_value::*;
pub use rgb_value::*;
pub use transform_color::*;
