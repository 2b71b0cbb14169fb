// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal's fixed color ramp: 16 base colors, the 6×6×6 cube, and the grayscale
//! ramp.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

// Attach.
mod base_palette;
mod color_table_impl;
mod global_color_table_impl;

// Re-export.
pub use base_palette::*;
pub use color_table_impl::*;
pub use global_color_table_impl::*;
