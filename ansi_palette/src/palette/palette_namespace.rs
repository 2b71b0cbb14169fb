// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, sync::Arc};

use rustc_hash::FxHashMap;

use crate::{AnsiValue, AttributeError, BasePalette, Category, PaletteResult, PaletteTier,
            RgbValue, Selector, SgrCode, StyleToken, X11ColorNames, global_color_table,
            lookup_plain_attribute, lookup_web_color};

/// A namespace of style attributes (foreground colors, background colors, effects, or
/// effect terminators) that turns attribute names into [`StyleToken`]s.
///
/// Callers hold a `Box<dyn Palette>` made by [`create_palette`] and never need to know
/// whether color is actually on: when it's off, every name resolves to an inert token.
pub trait Palette: Debug {
    fn category(&self) -> Category;

    fn tier(&self) -> PaletteTier;

    /// The token for `name`. Successful results are cached for the life of the
    /// namespace, so asking again is a map lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError`] if `name` is malformed or unknown. A name that is
    /// valid but needs a higher tier than [`Self::tier`] is not an error, it resolves to
    /// an inert token.
    fn resolve(&mut self, name: &str) -> PaletteResult<StyleToken>;

    /// `false` for the inert variant.
    fn is_active(&self) -> bool;

    /// How many names have been resolved and cached so far.
    fn cached_len(&self) -> usize;

    /// Resolves each name and composes the results, left to right.
    ///
    /// # Errors
    ///
    /// Returns the first [`AttributeError`] from [`Self::resolve`].
    fn resolve_all(&mut self, names: &[&str]) -> PaletteResult<StyleToken> {
        let mut acc = StyleToken::inert();
        for name in names {
            acc = acc.compose(&self.resolve(name)?);
        }
        Ok(acc)
    }
}

/// Picks the variant for `tier`: [`InertPalette`] for [`PaletteTier::None`],
/// [`ActivePalette`] otherwise.
#[must_use]
pub fn create_palette(
    category: Category,
    tier: PaletteTier,
    options: ActivePaletteOptions,
) -> Box<dyn Palette> {
    if tier.is_none() {
        Box::new(InertPalette::new(category))
    } else {
        Box::new(ActivePalette::new(category, tier, options))
    }
}

/// What an [`ActivePalette`] needs besides its category and tier.
#[derive(Debug, Clone)]
pub struct ActivePaletteOptions {
    pub base_palette: BasePalette,
    pub downgrade_truecolor: bool,
    pub x11_names: Arc<X11ColorNames>,
}

impl Default for ActivePaletteOptions {
    fn default() -> Self {
        Self {
            base_palette: BasePalette::default(),
            downgrade_truecolor: false,
            x11_names: Arc::new(X11ColorNames::default()),
        }
    }
}

#[derive(Debug)]
pub struct ActivePalette {
    category: Category,
    tier: PaletteTier,
    options: ActivePaletteOptions,
    cache: FxHashMap<String, StyleToken>,
}

impl ActivePalette {
    #[must_use]
    pub fn new(category: Category, tier: PaletteTier, options: ActivePaletteOptions) -> Self {
        Self {
            category,
            tier,
            options,
            cache: FxHashMap::default(),
        }
    }

    /// Validate, then gate on the tier, then build.
    fn build(&self, name: &str) -> PaletteResult<StyleToken> {
        if let Some(code) = lookup_plain_attribute(self.category, name) {
            return Ok(StyleToken::new(name, self.category, [SgrCode::Plain(code)]));
        }

        if !self.category.is_color() {
            return Err(AttributeError::UnknownName {
                name: name.to_string(),
                category: self.category,
            });
        }

        let selector = Selector::parse(name, self.category)?;
        let required = selector.required_tier();

        let code = match selector {
            Selector::Indexed(ansi) => self.indexed_code(ansi),
            Selector::Nearest(rgb) => {
                let ansi = global_color_table::get_for(self.options.base_palette)
                    .nearest_extended(rgb);
                self.indexed_code(ansi)
            }
            Selector::Truecolor(rgb) => self.truecolor_code(rgb),
            Selector::X11Name(payload) => {
                let rgb = self
                    .options
                    .x11_names
                    .lookup(payload)
                    .ok_or_else(|| self.unknown_name(name))?;
                self.truecolor_code(rgb)
            }
            Selector::WebName(payload) => {
                let rgb = lookup_web_color(payload).ok_or_else(|| self.unknown_name(name))?;
                self.truecolor_code(rgb)
            }
        };

        if self.tier.supports(required) {
            return Ok(StyleToken::new(name, self.category, [code]));
        }

        if let Some(downgraded) = self.try_downgrade(code) {
            tracing::debug!(
                message = "Approximated attribute on the 256 color ramp",
                name = name,
                tier = %self.tier,
                code = %downgraded
            );
            return Ok(StyleToken::new(name, self.category, [downgraded]));
        }

        tracing::debug!(
            message = "Attribute needs a higher tier, resolving to inert token",
            name = name,
            tier = %self.tier,
            required = %required
        );
        Ok(StyleToken::inert_named(name))
    }

    fn indexed_code(&self, ansi: AnsiValue) -> SgrCode {
        match self.category {
            Category::Background => SgrCode::bg_ansi(ansi),
            _ => SgrCode::fg_ansi(ansi),
        }
    }

    fn truecolor_code(&self, rgb: RgbValue) -> SgrCode {
        match self.category {
            Category::Background => SgrCode::bg_rgb(rgb),
            _ => SgrCode::fg_rgb(rgb),
        }
    }

    /// Truecolor codes at [`PaletteTier::Extended`] become the nearest indexed code,
    /// if [`ActivePaletteOptions::downgrade_truecolor`] is on.
    fn try_downgrade(&self, code: SgrCode) -> Option<SgrCode> {
        if !self.options.downgrade_truecolor || !self.tier.supports(PaletteTier::Extended) {
            return None;
        }
        let rgb = match code {
            SgrCode::ForegroundRgb(red, green, blue) | SgrCode::BackgroundRgb(red, green, blue) => {
                RgbValue { red, green, blue }
            }
            _ => return None,
        };
        let ansi = global_color_table::get_for(self.options.base_palette).nearest_extended(rgb);
        Some(self.indexed_code(ansi))
    }

    fn unknown_name(&self, name: &str) -> AttributeError {
        AttributeError::UnknownName {
            name: name.to_string(),
            category: self.category,
        }
    }
}

impl Palette for ActivePalette {
    fn category(&self) -> Category { self.category }

    fn tier(&self) -> PaletteTier { self.tier }

    fn resolve(&mut self, name: &str) -> PaletteResult<StyleToken> {
        if let Some(it) = self.cache.get(name) {
            return Ok(it.clone());
        }

        tracing::trace!(
            message = "Resolving attribute",
            category = %self.category,
            name = name
        );
        let token = self.build(name)?;
        self.cache.insert(name.to_string(), token.clone());
        Ok(token)
    }

    fn is_active(&self) -> bool { true }

    fn cached_len(&self) -> usize { self.cache.len() }
}

/// The no-op namespace, used when the tier is [`PaletteTier::None`]. Every name,
/// valid or not, resolves to an inert token, so text wrapped with it comes out
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InertPalette {
    category: Category,
}

impl InertPalette {
    #[must_use]
    pub fn new(category: Category) -> Self { Self { category } }
}

impl Palette for InertPalette {
    fn category(&self) -> Category { self.category }

    fn tier(&self) -> PaletteTier { PaletteTier::None }

    fn resolve(&mut self, name: &str) -> PaletteResult<StyleToken> {
        Ok(StyleToken::inert_named(name))
    }

    fn is_active(&self) -> bool { false }

    fn cached_len(&self) -> usize { 0 }
}
