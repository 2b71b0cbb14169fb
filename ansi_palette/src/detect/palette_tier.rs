// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// How much color a terminal is assumed to show. The order matters: a palette bound to
/// a tier only builds attributes that need that tier or less.
///
/// | tier        | attributes                                  |
/// |-------------|---------------------------------------------|
/// | `None`      | nothing, every namespace is inert           |
/// | `Basic`     | plain names (`red`, `bold`, `lightcyan`)    |
/// | `Extended`  | + indexed `i208` and nearest `nf80`         |
/// | `Truecolor` | + truecolor `tff8000`, named `xgold` `wtan` |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PaletteTier {
    None,
    Basic,
    Extended,
    Truecolor,
}

impl PaletteTier {
    /// `true` if attributes that need `required` can be shown at this tier.
    #[must_use]
    pub fn supports(self, required: PaletteTier) -> bool {
        required != PaletteTier::None && self >= required
    }

    #[must_use]
    pub fn is_none(self) -> bool { self == PaletteTier::None }
}

/// These trait implementations allow us to use [`PaletteTier`] and `i8`
/// interchangeably, which is what the atomics in
/// [`crate::global_palette_tier`] store.
mod convert_between_tier_and_i8 {
    use super::PaletteTier;

    impl TryFrom<i8> for PaletteTier {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(PaletteTier::None),
                1 => Ok(PaletteTier::Basic),
                2 => Ok(PaletteTier::Extended),
                3 => Ok(PaletteTier::Truecolor),
                _ => Err(()),
            }
        }
    }

    impl From<PaletteTier> for i8 {
        #[rustfmt::skip]
        fn from(value: PaletteTier) -> Self {
            match value {
                PaletteTier::None      => 0,
                PaletteTier::Basic     => 1,
                PaletteTier::Extended  => 2,
                PaletteTier::Truecolor => 3,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_order() {
        assert!(PaletteTier::None < PaletteTier::Basic);
        assert!(PaletteTier::Basic < PaletteTier::Extended);
        assert!(PaletteTier::Extended < PaletteTier::Truecolor);
    }

    #[test_case(PaletteTier::Truecolor, PaletteTier::Basic, true)]
    #[test_case(PaletteTier::Extended, PaletteTier::Extended, true)]
    #[test_case(PaletteTier::Extended, PaletteTier::Truecolor, false)]
    #[test_case(PaletteTier::Basic, PaletteTier::Extended, false)]
    #[test_case(PaletteTier::None, PaletteTier::Basic, false)]
    #[test_case(PaletteTier::None, PaletteTier::None, false)]
    fn test_supports(tier: PaletteTier, required: PaletteTier, expected: bool) {
        assert_eq!(tier.supports(required), expected);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(PaletteTier::from_str("TrueColor"), Ok(PaletteTier::Truecolor));
        assert_eq!(PaletteTier::from_str("none"), Ok(PaletteTier::None));
        assert!(PaletteTier::from_str("16m").is_err());
        for it in PaletteTier::iter() {
            assert_eq!(PaletteTier::from_str(&it.to_string()), Ok(it));
        }
    }

    #[test]
    fn test_i8_round_trip() {
        for it in PaletteTier::iter() {
            assert_eq!(PaletteTier::try_from(i8::from(it)), Ok(it));
        }
        assert_eq!(PaletteTier::try_from(-1), Err(()));
    }
}
