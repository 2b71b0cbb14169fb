// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that turns the hex payload of a palette selector into
//! an [`RgbValue`]. Two shapes are accepted and the whole input must be consumed:
//! - `RRGGBB`, eg: `ff00bb`.
//! - `RGB`, eg: `b0b`, where each digit is doubled (`b` ▶ `bb` ▶ 187).
//!
//! There is no leading `#`; the selector prefix (`t`, `n`) plays that role.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::take_while_m_n,
          combinator::{all_consuming, map_res}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] from 3 or 6 hex digits.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not exactly 3 or 6 hex digits.
pub fn parse_hex_digits(input: &str) -> IResult<&str, RgbValue> {
    alt((
        all_consuming((
            helper_fns::parse_hex_pair,
            helper_fns::parse_hex_pair,
            helper_fns::parse_hex_pair,
        )),
        all_consuming((
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
            helper_fns::parse_hex_nibble,
        )),
    ))
    .map(|(red, green, blue)| RgbValue { red, green, blue })
    .parse(input)
}

/// Same as [`parse_hex_digits`], without the parser plumbing.
#[must_use]
pub fn try_parse_hex_digits(input: &str) -> Option<RgbValue> {
    parse_hex_digits(input).ok().map(|(_, rgb)| rgb)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_pair(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16)
        })
        .parse(input)
    }

    /// A single digit stands for the doubled digit, so `0xb` becomes `0xbb`.
    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16).map(|nibble| nibble * 0x11)
        })
        .parse(input)
    }
}
