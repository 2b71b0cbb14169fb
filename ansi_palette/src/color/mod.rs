// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color value types and conversions.
//!
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor) and [`AnsiValue`] (an index
//!   into the 16 or 256 color ramp).
//! - **Abstraction**: [`TransformColor`] converts between the two, approximating RGB
//!   values through the process wide [`crate::ColorTable`].
//! - **Parsing**: [`parse_hex_digits`] reads the 3 and 6 digit hex payloads used by
//!   palette selectors.

// Attach.
mod ansi_value;
mod hex_digits_parser;
mod rgb_value;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use hex_digits_parser::*;
pub use rgb_value::*;
pub use transform_color::*;
