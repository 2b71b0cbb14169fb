// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::SgrCode;

/// The class a [`crate::StyleToken`] belongs to. It decides which code undoes the
/// token, and which namespace of a [`crate::PaletteContext`] builds it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount,
)]
pub enum Category {
    #[strum(serialize = "fg")]
    Foreground,
    #[strum(serialize = "bg")]
    Background,
    #[strum(serialize = "fx")]
    Effect,
    #[strum(serialize = "defx")]
    EffectTerminator,
}

impl Category {
    /// The code that undoes a token of this category without touching the others.
    /// Effects have no shared "off" switch, so they fall back to the full reset.
    #[rustfmt::skip]
    #[must_use]
    pub const fn default_terminator(self) -> SgrCode {
        match self {
            Category::Foreground       => SgrCode::Plain(39),
            Category::Background       => SgrCode::Plain(49),
            Category::Effect           => SgrCode::RESET,
            Category::EffectTerminator => SgrCode::RESET,
        }
    }

    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(self, Category::Foreground | Category::Background)
    }
}

/// What [`crate::StyleToken::render_terminator`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// [`Category::default_terminator`], for tokens whose codes all share a category.
    CategoryDefault(Category),
    /// The universal reset, `0`.
    FullReset,
    /// Nothing at all. Only inert tokens use this.
    None,
}

impl Terminator {
    #[must_use]
    pub const fn code(self) -> Option<SgrCode> {
        match self {
            Terminator::CategoryDefault(category) => Some(category.default_terminator()),
            Terminator::FullReset => Some(SgrCode::RESET),
            Terminator::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test_case(Category::Foreground, "39")]
    #[test_case(Category::Background, "49")]
    #[test_case(Category::Effect, "0")]
    #[test_case(Category::EffectTerminator, "0")]
    fn test_default_terminator(category: Category, expected: &str) {
        assert_eq!(category.default_terminator().to_string(), expected);
        assert_eq!(
            Terminator::CategoryDefault(category).code(),
            Some(category.default_terminator())
        );
    }

    #[test]
    fn test_namespace_names() {
        assert_eq!(Category::COUNT, 4);
        let names: Vec<String> = Category::iter().map(|it| it.to_string()).collect();
        assert_eq!(names, vec!["fg", "bg", "fx", "defx"]);
        assert_eq!(Category::from_str("defx"), Ok(Category::EffectTerminator));
    }

    #[test]
    fn test_terminator_codes() {
        assert_eq!(Terminator::FullReset.code(), Some(SgrCode::RESET));
        assert_eq!(Terminator::None.code(), None);
    }
}
