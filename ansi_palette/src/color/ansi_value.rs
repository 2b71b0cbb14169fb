// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI palette index representation.
//!
//! Indices 0-15 address the basic ramp (the platform's base palette), 16-231 the
//! 6×6×6 color cube, and 232-255 the grayscale ramp.

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// Check if this is a basic ANSI color (indices 0-15).
    ///
    /// Basic colors can also be expressed with the short SGR codes `30-37` / `90-97`
    /// (foreground) and `40-47` / `100-107` (background), see [`Self::basic_sgr_code`].
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }

    /// Check if this is an extended ANSI color (indices 16-255).
    #[must_use]
    pub const fn is_extended(&self) -> bool { !self.is_basic() }

    /// Returns the short SGR code for a basic color, `None` for extended indices.
    ///
    /// Add `10` to the result for the background variant.
    #[must_use]
    pub const fn basic_sgr_code(&self) -> Option<u8> {
        match self.index {
            it @ 0..=7 => Some(30 + it),
            it @ 8..=15 => Some(90 + it - 8),
            _ => None,
        }
    }
}
