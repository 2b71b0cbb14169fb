// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{CSI, Category, SGR, SgrCode, Terminator};

/// An immutable list of SGR codes plus what it takes to undo them.
///
/// - Tokens are built by the [`crate::Palette`] namespaces, then combined with
///   [`Self::compose`] and turned into text with [`Self::render`] and [`Self::wrap`].
/// - Nothing here mutates a token. Every combining operation returns a new one, so
///   a token can be reused freely after being composed.
/// - A token with no codes is *inert*: it renders to `""`, wraps text unchanged and
///   writes nothing in a scope. This is what a namespace hands out when the terminal's
///   tier can't show the requested attribute.
///
/// There is no `Display` or `Add` impl. Use the named functions.
///
/// # Example usage:
///
/// ```rust
/// use ansi_palette::{Category, SgrCode, StyleToken};
///
/// let red = StyleToken::new("red", Category::Foreground, [SgrCode::Plain(31)]);
/// let on_blue = StyleToken::new("blue", Category::Background, [SgrCode::Plain(44)]);
///
/// assert_eq!(red.render(), "\x1b[31m");
/// assert_eq!(red.wrap("hi", &[]), "\x1b[31mhi\x1b[39m");
/// assert_eq!(red.wrap("hi", &[&on_blue]), "\x1b[31;44mhi\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleToken {
    name: sizing::TokenName,
    codes: sizing::InlineVecSgrCodes,
    kind: TokenKind,
    terminator: Terminator,
}

/// Which categories the codes of a [`StyleToken`] come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// No codes at all.
    Inert,
    Single(Category),
    /// Codes from more than one category.
    Mixed,
}

pub mod sizing {
    use super::*;

    /// Most tokens carry 1 code, composed ones a handful (fg + bg + an effect or two).
    pub const MAX_INLINE_SGR_CODES: usize = 4;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_INLINE_SGR_CODES]>;

    pub const DEFAULT_TOKEN_NAME_SIZE: usize = 16;
    pub type TokenName = SmallString<[u8; DEFAULT_TOKEN_NAME_SIZE]>;
}

impl StyleToken {
    /// A token whose codes all belong to `category`. With no codes the result is inert.
    pub fn new(
        name: &str,
        category: Category,
        codes: impl IntoIterator<Item = SgrCode>,
    ) -> Self {
        let codes: sizing::InlineVecSgrCodes = codes.into_iter().collect();
        if codes.is_empty() {
            return Self::inert_named(name);
        }
        Self {
            name: name.into(),
            codes,
            kind: TokenKind::Single(category),
            terminator: Terminator::CategoryDefault(category),
        }
    }

    /// The shared no-op token.
    #[must_use]
    pub fn inert() -> Self { Self::inert_named("") }

    #[must_use]
    pub fn inert_named(name: &str) -> Self {
        Self {
            name: name.into(),
            codes: SmallVec::new(),
            kind: TokenKind::Inert,
            terminator: Terminator::None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn codes(&self) -> &[SgrCode] { &self.codes }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    /// The category of a single category token, `None` for inert and mixed ones.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self.kind {
            TokenKind::Single(category) => Some(category),
            TokenKind::Inert | TokenKind::Mixed => None,
        }
    }

    #[must_use]
    pub fn terminator(&self) -> Terminator { self.terminator }

    /// `true` iff rendering this token emits anything.
    #[must_use]
    pub fn is_active(&self) -> bool { !self.codes.is_empty() }

    /// `self`'s codes followed by `other`'s, in a new token.
    ///
    /// | `self`      | `other`     | kind         | terminator           |
    /// |-------------|-------------|--------------|----------------------|
    /// | inert       | any         | `other`'s    | `other`'s            |
    /// | any         | inert       | `self`'s     | `self`'s             |
    /// | `Single(c)` | `Single(c)` | `Single(c)`  | `c`'s default        |
    /// | otherwise   |             | `Mixed`      | full reset           |
    ///
    /// Mixing categories ends with the full reset, since no single category default
    /// would undo everything.
    #[must_use]
    pub fn compose(&self, other: &StyleToken) -> StyleToken {
        let name = match (self.name.is_empty(), other.name.is_empty()) {
            (true, _) => other.name.clone(),
            (_, true) => self.name.clone(),
            _ => {
                let mut it = self.name.clone();
                it.push('+');
                it.push_str(&other.name);
                it
            }
        };

        let (kind, terminator) = match (self.kind, other.kind) {
            (TokenKind::Inert, _) => (other.kind, other.terminator),
            (_, TokenKind::Inert) => (self.kind, self.terminator),
            (TokenKind::Single(lhs), TokenKind::Single(rhs)) if lhs == rhs => {
                (TokenKind::Single(lhs), Terminator::CategoryDefault(lhs))
            }
            _ => (TokenKind::Mixed, Terminator::FullReset),
        };

        let mut codes = self.codes.clone();
        codes.extend_from_slice(&other.codes);

        StyleToken {
            name,
            codes,
            kind,
            terminator,
        }
    }

    /// Left to right [`Self::compose`] of all `tokens`. An empty slice gives an inert
    /// token.
    #[must_use]
    pub fn compose_all(tokens: &[&StyleToken]) -> StyleToken {
        tokens
            .iter()
            .fold(StyleToken::inert(), |acc, it| acc.compose(it))
    }

    /// `CSI` + codes joined by `;` + `m`, or `""` for an inert token.
    #[must_use]
    pub fn render(&self) -> String {
        let mut acc = String::new();
        self.render_into(&mut acc);
        acc
    }

    /// Same as [`Self::render`], appending to `acc` instead of allocating.
    pub fn render_into(&self, acc: &mut String) { render_codes_into(&self.codes, acc); }

    /// The sequence that undoes this token, `""` for an inert token.
    #[must_use]
    pub fn render_terminator(&self) -> String {
        let mut acc = String::new();
        if let Some(code) = self.terminator.code() {
            render_codes_into(&[code], &mut acc);
        }
        acc
    }

    /// Composes `extras` onto `self` (left to right), then surrounds `text` with the
    /// result and its terminator. Neither `self` nor `extras` change.
    #[must_use]
    pub fn wrap(&self, text: &str, extras: &[&StyleToken]) -> String {
        let combined = extras.iter().fold(self.clone(), |acc, it| acc.compose(it));
        let mut acc = String::with_capacity(text.len() + 16);
        combined.render_into(&mut acc);
        acc.push_str(text);
        if let Some(code) = combined.terminator.code() {
            render_codes_into(&[code], &mut acc);
        }
        acc
    }
}

fn render_codes_into(codes: &[SgrCode], acc: &mut String) {
    if codes.is_empty() {
        return;
    }
    acc.push_str(CSI);
    for (index, code) in codes.iter().enumerate() {
        if index > 0 {
            acc.push(';');
        }
        // Writing into a String can't fail.
        _ = write!(acc, "{code}");
    }
    acc.push_str(SGR);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn red() -> StyleToken {
        StyleToken::new("red", Category::Foreground, [SgrCode::Plain(31)])
    }

    fn bold() -> StyleToken { StyleToken::new("bold", Category::Effect, [SgrCode::Plain(1)]) }

    fn on_blue() -> StyleToken {
        StyleToken::new("blue", Category::Background, [SgrCode::Plain(44)])
    }

    fn orange() -> StyleToken {
        StyleToken::new("i208", Category::Foreground, [SgrCode::ForegroundAnsi256(208)])
    }

    #[test]
    fn test_render() {
        assert_eq!(red().render(), "\x1b[31m");
        assert_eq!(orange().render(), "\x1b[38;5;208m");
        assert_eq!(StyleToken::inert().render(), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let token = red().compose(&bold());
        assert_eq!(token.render(), token.render());
    }

    #[test]
    fn test_new_without_codes_is_inert() {
        let token = StyleToken::new("nothing", Category::Foreground, Vec::new());
        assert_eq!(token.kind(), TokenKind::Inert);
        assert_eq!(token.name(), "nothing");
        assert!(!token.is_active());
    }

    #[test]
    fn test_compose_same_category_keeps_category_terminator() {
        let token = red().compose(&orange());
        assert_eq!(token.kind(), TokenKind::Single(Category::Foreground));
        assert_eq!(token.category(), Some(Category::Foreground));
        assert_eq!(token.terminator(), Terminator::CategoryDefault(Category::Foreground));
        assert_eq!(token.render(), "\x1b[31;38;5;208m");
        assert_eq!(token.render_terminator(), "\x1b[39m");
        assert_eq!(token.name(), "red+i208");
    }

    #[test]
    fn test_compose_mixed_categories_uses_full_reset() {
        let token = red().compose(&bold());
        assert_eq!(token.kind(), TokenKind::Mixed);
        assert_eq!(token.category(), None);
        assert_eq!(token.terminator(), Terminator::FullReset);
        assert_eq!(token.render_terminator(), "\x1b[0m");
    }

    #[test]
    fn test_compose_does_not_mutate_operands() {
        let a = red();
        let b = bold();
        let _ = a.compose(&b);
        assert_eq!(a, red());
        assert_eq!(b, bold());
        assert_eq!(a.render(), "\x1b[31m");
    }

    #[test]
    fn test_compose_is_associative_in_output() {
        let (a, b, c) = (red(), bold(), on_blue());
        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        assert_eq!(left.render(), right.render());
        assert_eq!(left.render(), "\x1b[31;1;44m");
        assert_eq!(left.render_terminator(), right.render_terminator());
    }

    #[test]
    fn test_compose_with_inert_is_identity() {
        let inert = StyleToken::inert();
        assert_eq!(inert.compose(&red()), red());
        assert_eq!(red().compose(&inert), red());
        assert_eq!(inert.compose(&inert), StyleToken::inert());
    }

    #[test]
    fn test_compose_all() {
        assert_eq!(StyleToken::compose_all(&[]), StyleToken::inert());
        let token = StyleToken::compose_all(&[&red(), &bold(), &on_blue()]);
        assert_eq!(token.render(), "\x1b[31;1;44m");
        assert_eq!(token.name(), "red+bold+blue");
    }

    #[test]
    fn test_wrap() {
        let a = red();
        assert_eq!(
            a.wrap("TEXT", &[]),
            format!("{}TEXT{}", a.render(), a.render_terminator())
        );
        assert_eq!(a.wrap("TEXT", &[&bold()]), "\x1b[31;1mTEXT\x1b[0m");
        assert_eq!(a, red());
    }

    #[test]
    fn test_wrap_inert() {
        let inert = StyleToken::inert();
        assert_eq!(inert.wrap("plain", &[]), "plain");
        assert_eq!(inert.wrap("plain", &[&StyleToken::inert()]), "plain");
        // Extras still apply on top of an inert token.
        assert_eq!(inert.wrap("x", &[&bold()]), "\x1b[1mx\x1b[0m");
    }
}
