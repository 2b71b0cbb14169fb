// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Style tokens: immutable lists of SGR codes that compose, render, and wrap text.
//!
//! Wire format produced here:
//! - Style sequence: `CSI` (`ESC [`) + decimal codes joined by `;` + `m`.
//! - Indexed color: `38;5;N` (foreground) / `48;5;N` (background).
//! - Truecolor: `38;2;R;G;B` / `48;2;R;G;B`.
//! - Full reset: `0`.

// Attach.
mod category;
mod scoped_style;
mod sgr_code;
mod style_token_impl;

// Re-export.
pub use category::*;
pub use scoped_style::*;
pub use sgr_code::*;
pub use style_token_impl::*;
