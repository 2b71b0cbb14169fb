// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{ActivePaletteOptions, Category, Palette, PaletteConfig, PaletteResult, PaletteTier,
            StyleToken, X11ColorNames, create_palette};

/// The four namespaces an application styles text with, bound to one [`PaletteTier`].
/// Build it once at startup and pass it (or `&mut` to it) to whatever renders output.
///
/// # Example usage:
///
/// ```rust
/// use ansi_palette::{PaletteConfig, PaletteContext, PaletteTier};
///
/// let config = PaletteConfig::default().with_tier_override(PaletteTier::None);
/// let mut ctx = PaletteContext::new(&config);
///
/// // Color is off, so nothing is added to the text.
/// let warn = ctx.fg.resolve("yellow").unwrap();
/// assert_eq!(warn.wrap("careful", &[]), "careful");
/// ```
#[derive(Debug)]
pub struct PaletteContext {
    pub tier: PaletteTier,
    pub fg: Box<dyn Palette>,
    pub bg: Box<dyn Palette>,
    pub fx: Box<dyn Palette>,
    pub defx: Box<dyn Palette>,
}

impl PaletteContext {
    /// Uses [`PaletteConfig::resolve_tier`] to pick the tier.
    #[must_use]
    pub fn new(config: &PaletteConfig) -> Self {
        Self::with_tier(config.resolve_tier(), config)
    }

    /// Same as [`Self::new`] with an explicit tier, eg: in tests.
    #[must_use]
    pub fn with_tier(tier: PaletteTier, config: &PaletteConfig) -> Self {
        let options = ActivePaletteOptions {
            base_palette: config.base_palette,
            downgrade_truecolor: config.downgrade_truecolor,
            x11_names: Arc::new(X11ColorNames::new(config.x11_color_file_candidates())),
        };

        tracing::debug!(
            message = "Created palette context",
            tier = %tier,
            base_palette = %config.base_palette
        );

        Self {
            tier,
            fg: create_palette(Category::Foreground, tier, options.clone()),
            bg: create_palette(Category::Background, tier, options.clone()),
            fx: create_palette(Category::Effect, tier, options.clone()),
            defx: create_palette(Category::EffectTerminator, tier, options),
        }
    }

    /// The namespace for `category`.
    pub fn palette(&mut self, category: Category) -> &mut dyn Palette {
        match category {
            Category::Foreground => self.fg.as_mut(),
            Category::Background => self.bg.as_mut(),
            Category::Effect => self.fx.as_mut(),
            Category::EffectTerminator => self.defx.as_mut(),
        }
    }

    /// Shorthand for `self.palette(category).resolve(name)`.
    ///
    /// # Errors
    ///
    /// See [`Palette::resolve`].
    pub fn resolve(&mut self, category: Category, name: &str) -> PaletteResult<StyleToken> {
        self.palette(category).resolve(name)
    }

    #[must_use]
    pub fn is_active(&self) -> bool { !self.tier.is_none() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_none_tier_makes_every_namespace_inert() {
        let config = PaletteConfig::default();
        let mut ctx = PaletteContext::with_tier(PaletteTier::None, &config);
        assert!(!ctx.is_active());
        for category in Category::iter() {
            let palette = ctx.palette(category);
            assert!(!palette.is_active());
            assert_eq!(palette.category(), category);
            assert_eq!(palette.resolve("bold").unwrap().render(), "");
        }
    }

    #[test]
    fn test_namespaces_share_tier_and_keep_categories() {
        let config = PaletteConfig::default();
        let mut ctx = PaletteContext::with_tier(PaletteTier::Extended, &config);
        assert!(ctx.is_active());
        for category in Category::iter() {
            let palette = ctx.palette(category);
            assert!(palette.is_active());
            assert_eq!(palette.tier(), PaletteTier::Extended);
            assert_eq!(palette.category(), category);
        }
        assert_eq!(
            ctx.resolve(Category::Background, "i17").unwrap().render(),
            "\x1b[48;5;17m"
        );
    }

    #[test]
    fn test_compose_across_namespaces() {
        let config = PaletteConfig::default();
        let mut ctx = PaletteContext::with_tier(PaletteTier::Truecolor, &config);
        let fg = ctx.fg.resolve("tb0b").unwrap();
        let bg = ctx.bg.resolve("black").unwrap();
        let fx = ctx.fx.resolve("underline").unwrap();
        assert_eq!(
            fg.wrap("x", &[&bg, &fx]),
            "\x1b[38;2;187;0;187;40;4mx\x1b[0m"
        );
        // Operands are unchanged.
        assert_eq!(fg.render(), "\x1b[38;2;187;0;187m");
    }
}
