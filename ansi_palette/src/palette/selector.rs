// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Splits a color attribute name into a selector prefix and its payload, and validates
//! the payload.
//!
//! | prefix | meaning   | payload                  | example           |
//! |--------|-----------|--------------------------|-------------------|
//! | `i`    | indexed   | 1-3 decimal digits, ≤255 | `i208`            |
//! | `n`    | nearest   | exactly 3 hex digits     | `nf80`            |
//! | `t`    | truecolor | 3 or 6 hex digits        | `tb0b`, `tff8000` |
//! | `x`    | X11 name  | 3+ letters or digits     | `xnavajowhite`    |
//! | `w`    | web name  | 3+ letters or digits     | `wcornflowerblue` |
//!
//! Checks run in this order: payload length, then payload digits. Plain names
//! (`red`, `bold`) are not selectors; the namespace looks those up before calling
//! [`Selector::parse`].

use crate::{AnsiValue, AttributeError, Category, PaletteResult, PaletteTier, RgbValue,
            try_parse_hex_digits};

/// A validated color selector. Named colors are not looked up yet, since that needs
/// the name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Indexed(AnsiValue),
    Nearest(RgbValue),
    Truecolor(RgbValue),
    X11Name(&'a str),
    WebName(&'a str),
}

pub mod prefix {
    pub const INDEXED: char = 'i';
    pub const NEAREST: char = 'n';
    pub const TRUECOLOR: char = 't';
    pub const X11_NAME: char = 'x';
    pub const WEB_NAME: char = 'w';
}

const MIN_NAME_LEN: usize = 3;

impl<'a> Selector<'a> {
    /// Reads `name` as a color selector.
    ///
    /// # Errors
    ///
    /// - [`AttributeError::UnknownName`] if the first character isn't a selector
    ///   prefix. `category` is only used for this message.
    /// - [`AttributeError::BadLength`], [`AttributeError::BadDigits`],
    ///   [`AttributeError::IndexOutOfRange`] or [`AttributeError::BadLetters`] if the
    ///   payload is malformed.
    pub fn parse(name: &'a str, category: Category) -> PaletteResult<Self> {
        let mut chars = name.chars();
        let Some(selector) = chars.next() else {
            return Err(unknown_name(name, category));
        };
        let payload = chars.as_str();

        match selector {
            prefix::INDEXED => {
                check_length(name, selector, payload, 1..=3, "1-3")?;
                check_digits(name, selector, payload, 10)?;
                let value: u16 = payload.parse().map_err(|_| bad_digits(name, selector, 10))?;
                let index = u8::try_from(value).map_err(|_| AttributeError::IndexOutOfRange {
                    name: name.to_string(),
                    value,
                })?;
                Ok(Selector::Indexed(AnsiValue::new(index)))
            }
            prefix::NEAREST => {
                check_length(name, selector, payload, 3..=3, "3")?;
                check_digits(name, selector, payload, 16)?;
                parse_hex(name, selector, payload).map(Selector::Nearest)
            }
            prefix::TRUECOLOR => {
                let actual = payload.chars().count();
                if actual != 3 && actual != 6 {
                    return Err(AttributeError::BadLength {
                        name: name.to_string(),
                        selector,
                        expected: "3 or 6",
                        actual,
                    });
                }
                check_digits(name, selector, payload, 16)?;
                parse_hex(name, selector, payload).map(Selector::Truecolor)
            }
            prefix::X11_NAME | prefix::WEB_NAME => {
                check_length(name, selector, payload, MIN_NAME_LEN..=usize::MAX, "at least 3")?;
                if !payload.chars().all(|it| it.is_ascii_alphanumeric()) {
                    return Err(AttributeError::BadLetters {
                        name: name.to_string(),
                        selector,
                    });
                }
                Ok(if selector == prefix::X11_NAME {
                    Selector::X11Name(payload)
                } else {
                    Selector::WebName(payload)
                })
            }
            _ => Err(unknown_name(name, category)),
        }
    }

    /// The lowest tier that can show this selector without approximation.
    #[must_use]
    pub fn required_tier(&self) -> PaletteTier {
        match self {
            Selector::Indexed(_) | Selector::Nearest(_) => PaletteTier::Extended,
            Selector::Truecolor(_) | Selector::X11Name(_) | Selector::WebName(_) => {
                PaletteTier::Truecolor
            }
        }
    }
}

fn check_length(
    name: &str,
    selector: char,
    payload: &str,
    range: std::ops::RangeInclusive<usize>,
    expected: &'static str,
) -> PaletteResult<()> {
    let actual = payload.chars().count();
    if range.contains(&actual) {
        Ok(())
    } else {
        Err(AttributeError::BadLength {
            name: name.to_string(),
            selector,
            expected,
            actual,
        })
    }
}

fn check_digits(name: &str, selector: char, payload: &str, radix: u32) -> PaletteResult<()> {
    if payload.chars().all(|it| it.is_digit(radix)) {
        Ok(())
    } else {
        Err(bad_digits(name, selector, radix))
    }
}

fn parse_hex(name: &str, selector: char, payload: &str) -> PaletteResult<RgbValue> {
    try_parse_hex_digits(payload).ok_or_else(|| bad_digits(name, selector, 16))
}

fn bad_digits(name: &str, selector: char, radix: u32) -> AttributeError {
    AttributeError::BadDigits {
        name: name.to_string(),
        selector,
        radix,
    }
}

fn unknown_name(name: &str, category: Category) -> AttributeError {
    AttributeError::UnknownName {
        name: name.to_string(),
        category,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::AttributeErrorKind;

    const FG: Category = Category::Foreground;

    #[test_case("i0", 0)]
    #[test_case("i7", 7)]
    #[test_case("i208", 208)]
    #[test_case("i255", 255)]
    #[test_case("i007", 7)]
    fn test_indexed(name: &str, index: u8) {
        assert_eq!(
            Selector::parse(name, FG),
            Ok(Selector::Indexed(AnsiValue::new(index)))
        );
    }

    #[test_case("tb0b", (187, 0, 187))]
    #[test_case("tff8000", (255, 128, 0))]
    #[test_case("tFFF", (255, 255, 255))]
    fn test_truecolor(name: &str, rgb: (u8, u8, u8)) {
        assert_eq!(
            Selector::parse(name, FG),
            Ok(Selector::Truecolor(RgbValue::from(rgb)))
        );
    }

    #[test]
    fn test_nearest_and_names() {
        assert_eq!(
            Selector::parse("nf0f", FG),
            Ok(Selector::Nearest(RgbValue::from_u8(255, 0, 255)))
        );
        assert_eq!(
            Selector::parse("xNavajoWhite", FG),
            Ok(Selector::X11Name("NavajoWhite"))
        );
        assert_eq!(Selector::parse("wtan", FG), Ok(Selector::WebName("tan")));
        assert_eq!(Selector::parse("xgray50", FG), Ok(Selector::X11Name("gray50")));
    }

    #[test_case("i", AttributeErrorKind::Length)]
    #[test_case("i1234", AttributeErrorKind::Length)]
    #[test_case("indigo", AttributeErrorKind::Length)]
    #[test_case("i2a", AttributeErrorKind::DigitFormat)]
    #[test_case("i-1", AttributeErrorKind::DigitFormat)]
    #[test_case("i256", AttributeErrorKind::DigitFormat)]
    #[test_case("nff", AttributeErrorKind::Length)]
    #[test_case("nff00bb", AttributeErrorKind::Length)]
    #[test_case("nxyz", AttributeErrorKind::DigitFormat)]
    #[test_case("t", AttributeErrorKind::Length)]
    #[test_case("tff00", AttributeErrorKind::Length)]
    #[test_case("tggg", AttributeErrorKind::DigitFormat)]
    #[test_case("tff00zz", AttributeErrorKind::DigitFormat)]
    #[test_case("xab", AttributeErrorKind::Length)]
    #[test_case("wnavy blue", AttributeErrorKind::DigitFormat)]
    #[test_case("", AttributeErrorKind::UnknownName)]
    #[test_case("reddish", AttributeErrorKind::UnknownName)]
    fn test_rejected(name: &str, kind: AttributeErrorKind) {
        let error = Selector::parse(name, FG).unwrap_err();
        assert_eq!(error.kind(), kind, "{name}: {error}");
        assert_eq!(error.name(), name);
    }

    #[test]
    fn test_required_tier() {
        assert_eq!(
            Selector::Indexed(AnsiValue::new(1)).required_tier(),
            PaletteTier::Extended
        );
        assert_eq!(
            Selector::Nearest(RgbValue::default()).required_tier(),
            PaletteTier::Extended
        );
        assert_eq!(
            Selector::Truecolor(RgbValue::default()).required_tier(),
            PaletteTier::Truecolor
        );
        assert_eq!(Selector::WebName("tan").required_tier(), PaletteTier::Truecolor);
    }
}
