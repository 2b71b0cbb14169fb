// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ansi_palette
//!
//! Style composition engine for ANSI capable terminals. It builds, combines, and emits
//! SGR (Select Graphic Rendition) escape sequences while degrading gracefully on
//! terminals with lesser (or no) color support.
//!
//! ## Moving parts
//!
//! ```text
//!   env + tty ──▶ detect ──▶ PaletteTier ──▶ PaletteContext { fg, bg, fx, defx }
//!                                                    │
//!                        "red", "i208", "tb0b", ─────┤ resolve() (validated, cached)
//!                        "xgold", "wcrimson"         ▼
//!                                               StyleToken ──▶ compose / render / wrap
//!                                                    ▲
//!                   ColorTable ──▶ nearest ──────────┘ (truecolor ▶ indexed)
//! ```
//!
//! - [`PaletteTier`] is one of none / basic / extended / truecolor. It is detected once
//!   from `TERM`, `COLORTERM`, `ANSICON`, `CLICOLOR`, `CLICOLOR_FORCE`, `NO_COLOR` and
//!   the tty-ness of the output stream (see [`global_palette_tier`]).
//! - A [`PaletteContext`] holds four namespaces (foreground, background, effect,
//!   effect-terminator). Each one is a [`Palette`], either an [`ActivePalette`] or an
//!   [`InertPalette`] when color is off. Callers never branch on which.
//! - [`StyleToken`] is an immutable list of SGR parameters. Composition returns new
//!   tokens and never mutates its operands.
//! - [`ColorTable`] and [`nearest_index`] approximate RGB values on the fixed 16 or 256
//!   color ramps.
//!
//! ## Example
//!
//! ```rust
//! use ansi_palette::{PaletteConfig, PaletteContext, PaletteTier};
//!
//! let config = PaletteConfig::default().with_tier_override(PaletteTier::Truecolor);
//! let mut ctx = PaletteContext::new(&config);
//!
//! let red = ctx.fg.resolve("red").unwrap();
//! let bold = ctx.fx.resolve("bold").unwrap();
//! assert_eq!(red.render(), "\x1b[31m");
//! assert_eq!(
//!     red.wrap("alert", &[&bold]),
//!     "\x1b[31;1malert\x1b[0m"
//! );
//!
//! let orange = ctx.fg.resolve("tff8000").unwrap();
//! assert_eq!(orange.render(), "\x1b[38;2;255;128;0m");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Production code must propagate errors, tests may unwrap.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod color_table;
pub mod config;
pub mod detect;
pub mod error;
pub mod log;
pub mod nearest;
pub mod palette;
pub mod style_token;
pub mod swatch;

// Re-export.
pub use color::*;
pub use color_table::*;
pub use config::*;
pub use detect::*;
pub use error::*;
pub use log::*;
pub use nearest::*;
pub use palette::*;
pub use style_token::*;
pub use swatch::*;
