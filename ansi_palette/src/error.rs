// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed errors, rendered with [miette].
//!
//! - [`AttributeError`] is the only error a palette namespace returns. It means the
//!   caller asked for something malformed, so it always propagates.
//! - A tier that can't show an attribute, or a missing X11 color file, is not an error
//!   here. The former resolves to an inert token, the latter surfaces as
//!   [`AttributeError::UnknownName`] only when an X11 name is actually requested.
//! - [`ConfigError`] is logged by [`crate::PaletteConfig::from_env`] and never returned
//!   to the caller.

use crate::Category;

/// Convenience type alias for palette lookups.
pub type PaletteResult<T> = Result<T, AttributeError>;

/// Which check rejected an attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AttributeErrorKind {
    Length,
    DigitFormat,
    UnknownName,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum AttributeError {
    #[error(
        "Attribute '{name}' not recognized: '{selector}' payload has {actual} characters, expected {expected}"
    )]
    #[diagnostic(
        code(ansi_palette::attribute::length),
        help("Indexed colors take 1-3 digits (i208), nearest colors 3 hex digits (nf80), truecolor 3 or 6 hex digits (tb0b, tff00bb)")
    )]
    BadLength {
        name: String,
        selector: char,
        expected: &'static str,
        actual: usize,
    },

    #[error(
        "Attribute '{name}' not recognized: '{selector}' payload must be base {radix} digits"
    )]
    #[diagnostic(
        code(ansi_palette::attribute::digit_format),
        help("Use decimal digits after 'i' and hex digits (0-9, a-f) after 'n' and 't'")
    )]
    BadDigits {
        name: String,
        selector: char,
        radix: u32,
    },

    #[error("Attribute '{name}' not recognized: color index {value} is larger than 255")]
    #[diagnostic(
        code(ansi_palette::attribute::digit_format),
        help("The 256 color ramp is indexed 0-255")
    )]
    IndexOutOfRange { name: String, value: u16 },

    #[error(
        "Attribute '{name}' not recognized: '{selector}' payload must be letters and digits only"
    )]
    #[diagnostic(
        code(ansi_palette::attribute::digit_format),
        help("Named colors are written without spaces, eg: wcornflowerblue, xnavajowhite")
    )]
    BadLetters { name: String, selector: char },

    #[error("Attribute '{name}' not recognized by the '{category}' palette")]
    #[diagnostic(
        code(ansi_palette::attribute::unknown_name),
        help("Check the spelling. X11 names also need a readable rgb.txt on this system")
    )]
    UnknownName { name: String, category: Category },
}

impl AttributeError {
    #[must_use]
    pub fn kind(&self) -> AttributeErrorKind {
        match self {
            AttributeError::BadLength { .. } => AttributeErrorKind::Length,
            AttributeError::BadDigits { .. }
            | AttributeError::IndexOutOfRange { .. }
            | AttributeError::BadLetters { .. } => AttributeErrorKind::DigitFormat,
            AttributeError::UnknownName { .. } => AttributeErrorKind::UnknownName,
        }
    }

    /// The attribute name as the caller wrote it.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            AttributeError::BadLength { name, .. }
            | AttributeError::BadDigits { name, .. }
            | AttributeError::IndexOutOfRange { name, .. }
            | AttributeError::BadLetters { name, .. }
            | AttributeError::UnknownName { name, .. } => name,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum ConfigError {
    #[error("Could not parse {var}='{value}', expected one of: {expected}")]
    #[diagnostic(
        code(ansi_palette::config::invalid_value),
        help("The variable is ignored, unset it or pick one of the listed values")
    )]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}
