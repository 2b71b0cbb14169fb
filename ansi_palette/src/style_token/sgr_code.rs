// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{AnsiValue, RgbValue};

/// One SGR parameter, as it appears between the `;` separators of a style sequence.
/// Rendering a whole sequence (with [`CSI`] and [`SGR`]) is the job of
/// [`crate::StyleToken`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    /// Any single numeric code: `0` (reset), `1` (bold), `31` (red), `39` (default
    /// foreground), and so on.
    Plain(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRgb(u8, u8, u8),
    BackgroundRgb(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    pub const RESET_CODE: u8 = 0;

    impl SgrCode {
        pub const RESET: SgrCode = SgrCode::Plain(RESET_CODE);

        #[must_use]
        pub const fn fg_ansi(ansi: AnsiValue) -> Self { SgrCode::ForegroundAnsi256(ansi.index) }

        #[must_use]
        pub const fn bg_ansi(ansi: AnsiValue) -> Self { SgrCode::BackgroundAnsi256(ansi.index) }

        #[must_use]
        pub const fn fg_rgb(rgb: RgbValue) -> Self {
            SgrCode::ForegroundRgb(rgb.red, rgb.green, rgb.blue)
        }

        #[must_use]
        pub const fn bg_rgb(rgb: RgbValue) -> Self {
            SgrCode::BackgroundRgb(rgb.red, rgb.green, rgb.blue)
        }
    }

    impl Display for SgrCode {
        /// The parameter text only, eg: `38;5;208`.
        /// More info:
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Plain(code)              => write!(f, "{code}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}"),
                SgrCode::ForegroundRgb(r, g, b)   => write!(f, "38;2;{r};{g};{b}"),
                SgrCode::BackgroundRgb(r, g, b)   => write!(f, "48;2;{r};{g};{b}"),
            }
        }
    }
}
pub use sgr_code_impl::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reset() {
        assert_eq!(SgrCode::RESET.to_string(), "0");
    }

    #[test]
    fn plain() {
        assert_eq!(SgrCode::Plain(1).to_string(), "1");
        assert_eq!(SgrCode::Plain(107).to_string(), "107");
    }

    #[test]
    fn fg_color_ansi256() {
        let sgr_code = SgrCode::fg_ansi(AnsiValue::new(150));
        assert_eq!(sgr_code.to_string(), "38;5;150");
    }

    #[test]
    fn bg_color_ansi256() {
        let sgr_code = SgrCode::bg_ansi(AnsiValue::new(150));
        assert_eq!(sgr_code.to_string(), "48;5;150");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::fg_rgb(RgbValue::from_u8(175, 215, 135));
        assert_eq!(sgr_code.to_string(), "38;2;175;215;135");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::bg_rgb(RgbValue::from_u8(175, 215, 135));
        assert_eq!(sgr_code.to_string(), "48;2;175;215;135");
    }
}
