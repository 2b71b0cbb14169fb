// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::env;

use strum_macros::{Display, EnumIter, EnumString};

use crate::RgbValue;

/// The 16 colors a terminal shows for indices 0-15. Unlike the cube and the grayscale
/// ramp these differ between terminals, so the nearest color search needs to know which
/// one is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BasePalette {
    #[default]
    Xterm,
    /// IBM VGA text mode, also what the Linux console uses.
    Vga,
    /// Windows 10 console (Campbell scheme).
    Windows,
}

impl BasePalette {
    /// Pick the base palette for the current platform and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        if env::consts::OS == "windows" {
            return BasePalette::Windows;
        }
        match env::var("TERM") {
            Ok(term) if term == "linux" || term.starts_with("vga") => BasePalette::Vga,
            _ => BasePalette::Xterm,
        }
    }

    #[must_use]
    pub const fn colors(self) -> &'static [RgbValue; 16] {
        match self {
            BasePalette::Xterm => &XTERM_BASE_PALETTE,
            BasePalette::Vga => &VGA_BASE_PALETTE,
            BasePalette::Windows => &WINDOWS_BASE_PALETTE,
        }
    }
}

const fn rgb(red: u8, green: u8, blue: u8) -> RgbValue { RgbValue::from_u8(red, green, blue) }

#[rustfmt::skip]
pub const XTERM_BASE_PALETTE: [RgbValue; 16] = [
    rgb(0, 0, 0),       // 0: Black
    rgb(205, 0, 0),     // 1: Red
    rgb(0, 205, 0),     // 2: Green
    rgb(205, 205, 0),   // 3: Yellow
    rgb(0, 0, 238),     // 4: Blue
    rgb(205, 0, 205),   // 5: Magenta
    rgb(0, 205, 205),   // 6: Cyan
    rgb(229, 229, 229), // 7: White
    rgb(127, 127, 127), // 8: Bright Black
    rgb(255, 0, 0),     // 9: Bright Red
    rgb(0, 255, 0),     // 10: Bright Green
    rgb(255, 255, 0),   // 11: Bright Yellow
    rgb(92, 92, 255),   // 12: Bright Blue
    rgb(255, 0, 255),   // 13: Bright Magenta
    rgb(0, 255, 255),   // 14: Bright Cyan
    rgb(255, 255, 255), // 15: Bright White
];

#[rustfmt::skip]
pub const VGA_BASE_PALETTE: [RgbValue; 16] = [
    rgb(0, 0, 0),       // 0: Black
    rgb(170, 0, 0),     // 1: Red
    rgb(0, 170, 0),     // 2: Green
    rgb(170, 85, 0),    // 3: Brown
    rgb(0, 0, 170),     // 4: Blue
    rgb(170, 0, 170),   // 5: Magenta
    rgb(0, 170, 170),   // 6: Cyan
    rgb(170, 170, 170), // 7: White
    rgb(85, 85, 85),    // 8: Bright Black
    rgb(255, 85, 85),   // 9: Bright Red
    rgb(85, 255, 85),   // 10: Bright Green
    rgb(255, 255, 85),  // 11: Bright Yellow
    rgb(85, 85, 255),   // 12: Bright Blue
    rgb(255, 85, 255),  // 13: Bright Magenta
    rgb(85, 255, 255),  // 14: Bright Cyan
    rgb(255, 255, 255), // 15: Bright White
];

#[rustfmt::skip]
pub const WINDOWS_BASE_PALETTE: [RgbValue; 16] = [
    rgb(12, 12, 12),    // 0: Black
    rgb(197, 15, 31),   // 1: Red
    rgb(19, 161, 14),   // 2: Green
    rgb(193, 156, 0),   // 3: Yellow
    rgb(0, 55, 218),    // 4: Blue
    rgb(136, 23, 152),  // 5: Magenta
    rgb(58, 150, 221),  // 6: Cyan
    rgb(204, 204, 204), // 7: White
    rgb(118, 118, 118), // 8: Bright Black
    rgb(231, 72, 86),   // 9: Bright Red
    rgb(22, 198, 12),   // 10: Bright Green
    rgb(249, 241, 165), // 11: Bright Yellow
    rgb(59, 120, 255),  // 12: Bright Blue
    rgb(180, 0, 158),   // 13: Bright Magenta
    rgb(97, 214, 214),  // 14: Bright Cyan
    rgb(242, 242, 242), // 15: Bright White
];
