// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain attribute names and the one SGR code each stands for. These are what a
//! namespace checks first, before trying to read a name as a selector, so `italic` is
//! an effect and never an indexed color.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use crate::Category;

/// The SGR code for a plain attribute `name` in `category`, if there is one. Names
/// are matched exactly (lowercase, no spaces).
#[must_use]
pub fn lookup_plain_attribute(category: Category, name: &str) -> Option<u8> {
    plain_attributes(category)
        .iter()
        .find(|(it, _)| *it == name)
        .map(|(_, code)| *code)
}

#[must_use]
pub const fn plain_attributes(category: Category) -> &'static [(&'static str, u8)] {
    match category {
        Category::Foreground => &FOREGROUND_ATTRIBUTES,
        Category::Background => &BACKGROUND_ATTRIBUTES,
        Category::Effect => &EFFECT_ATTRIBUTES,
        Category::EffectTerminator => &EFFECT_TERMINATOR_ATTRIBUTES,
    }
}

#[rustfmt::skip]
pub const FOREGROUND_ATTRIBUTES: [(&str, u8); 24] = [
    ("black",        30),
    ("red",          31),
    ("green",        32),
    ("yellow",       33),
    ("blue",         34),
    ("purple",       35),
    ("magenta",      35),
    ("cyan",         36),
    ("lightgray",    37),
    ("lightgrey",    37),
    ("white",        37),
    ("default",      39),
    ("lightblack",   90),
    ("darkgray",     90),
    ("darkgrey",     90),
    ("lightred",     91),
    ("lightgreen",   92),
    ("lightyellow",  93),
    ("lightblue",    94),
    ("lightpurple",  95),
    ("lightmagenta", 95),
    ("lightcyan",    96),
    ("lightwhite",   97),
    ("brightwhite",  97),
];

/// Same names as [`FOREGROUND_ATTRIBUTES`], each code `+ 10`.
#[rustfmt::skip]
pub const BACKGROUND_ATTRIBUTES: [(&str, u8); 24] = [
    ("black",        40),
    ("red",          41),
    ("green",        42),
    ("yellow",       43),
    ("blue",         44),
    ("purple",       45),
    ("magenta",      45),
    ("cyan",         46),
    ("lightgray",    47),
    ("lightgrey",    47),
    ("white",        47),
    ("default",      49),
    ("lightblack",   100),
    ("darkgray",     100),
    ("darkgrey",     100),
    ("lightred",     101),
    ("lightgreen",   102),
    ("lightyellow",  103),
    ("lightblue",    104),
    ("lightpurple",  105),
    ("lightmagenta", 105),
    ("lightcyan",    106),
    ("lightwhite",   107),
    ("brightwhite",  107),
];

#[rustfmt::skip]
pub const EFFECT_ATTRIBUTES: [(&str, u8); 15] = [
    ("end",          0),
    ("reset",        0),
    ("bold",         1),
    ("dim",          2),
    ("italic",       3),
    ("underline",    4),
    ("blink",        5),
    ("fastblink",    6),
    ("reverse",      7),
    ("conceal",      8),
    ("crossed",      9),
    ("dunder",       21),
    ("frame",        51),
    ("encircle",     52),
    ("overline",     53),
];

/// The codes that switch off one effect each, named after the effect they undo.
#[rustfmt::skip]
pub const EFFECT_TERMINATOR_ATTRIBUTES: [(&str, u8); 13] = [
    ("bold",         22),
    ("dim",          22),
    ("italic",       23),
    ("underline",    24),
    ("dunder",       24),
    ("blink",        25),
    ("fastblink",    25),
    ("reverse",      27),
    ("conceal",      28),
    ("crossed",      29),
    ("frame",        54),
    ("encircle",     54),
    ("overline",     55),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case(Category::Foreground, "red", Some(31))]
    #[test_case(Category::Foreground, "lightcyan", Some(96))]
    #[test_case(Category::Background, "red", Some(41))]
    #[test_case(Category::Background, "default", Some(49))]
    #[test_case(Category::Effect, "bold", Some(1))]
    #[test_case(Category::Effect, "overline", Some(53))]
    #[test_case(Category::EffectTerminator, "bold", Some(22))]
    #[test_case(Category::EffectTerminator, "italic", Some(23))]
    #[test_case(Category::Foreground, "bold", None)]
    #[test_case(Category::Effect, "red", None)]
    #[test_case(Category::Foreground, "Red", None)]
    fn test_lookup(category: Category, name: &str, expected: Option<u8>) {
        assert_eq!(lookup_plain_attribute(category, name), expected);
    }

    #[test]
    fn test_background_is_foreground_plus_ten() {
        for ((fg_name, fg_code), (bg_name, bg_code)) in
            FOREGROUND_ATTRIBUTES.iter().zip(BACKGROUND_ATTRIBUTES.iter())
        {
            assert_eq!(fg_name, bg_name);
            assert_eq!(fg_code + 10, *bg_code);
        }
    }

    #[test]
    fn test_names_are_unique_per_category() {
        for category in Category::iter() {
            let table = plain_attributes(category);
            for (index, (name, _)) in table.iter().enumerate() {
                assert!(
                    table[index + 1..].iter().all(|(other, _)| other != name),
                    "{name} is listed twice in {category}"
                );
            }
        }
    }
}
