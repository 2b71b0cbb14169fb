// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`PaletteConfig`] is everything a [`crate::PaletteContext`] needs to know before it
//! builds its namespaces. It is an explicit value: build it with
//! [`PaletteConfig::from_env`] or [`PaletteConfig::default`] plus the `with_*` methods,
//! and pass it down.
//!
//! | variable                  | field                  | values                                |
//! |---------------------------|------------------------|---------------------------------------|
//! | `ANSI_PALETTE_TIER`       | `tier_override`        | `none`, `basic`, `extended`, `truecolor` |
//! | `ANSI_PALETTE_AUTODETECT` | `autodetect`           | `0` or `false` disables detection     |
//! | `ANSI_PALETTE_BASE`       | `base_palette`         | `xterm`, `vga`, `linux`, `windows`    |
//! | `ANSI_PALETTE_X11_FILE`   | `x11_color_file`       | path to an X11 `rgb.txt`              |

use std::{env,
          path::{Path, PathBuf},
          str::FromStr};

use crate::{BasePalette, ConfigError, PaletteTier, Stream, global_palette_tier};

pub mod env_var_names {
    pub const TIER: &str = "ANSI_PALETTE_TIER";
    pub const AUTODETECT: &str = "ANSI_PALETTE_AUTODETECT";
    pub const BASE: &str = "ANSI_PALETTE_BASE";
    pub const X11_FILE: &str = "ANSI_PALETTE_X11_FILE";
}

/// Where X11 installs usually keep `rgb.txt`, tried in order.
pub const DEFAULT_X11_COLOR_FILES: [&str; 3] = [
    "/etc/X11/rgb.txt",
    "/usr/share/X11/rgb.txt",
    "/usr/lib/X11/rgb.txt",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Wins over both [`global_palette_tier::set_override`] and detection.
    pub tier_override: Option<PaletteTier>,
    /// When `false`, no detection runs and the tier is [`PaletteTier::Truecolor`]
    /// unless overridden.
    pub autodetect: bool,
    pub stream: Stream,
    pub base_palette: BasePalette,
    /// Approximate truecolor and named color requests on the 256 color ramp at
    /// [`PaletteTier::Extended`], instead of resolving them to inert tokens.
    pub downgrade_truecolor: bool,
    /// `None` searches [`DEFAULT_X11_COLOR_FILES`].
    pub x11_color_file: Option<PathBuf>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            tier_override: None,
            autodetect: true,
            stream: Stream::default(),
            base_palette: BasePalette::detect(),
            downgrade_truecolor: false,
            x11_color_file: None,
        }
    }
}

impl PaletteConfig {
    /// Reads the `ANSI_PALETTE_*` variables on top of [`Self::default`]. Values that
    /// don't parse are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut it = Self::default();

        if let Some(value) = read_env_var(env_var_names::TIER) {
            match PaletteTier::from_str(&value) {
                Ok(tier) => it.tier_override = Some(tier),
                Err(_) => report_invalid(env_var_names::TIER, value, "none, basic, extended, truecolor"),
            }
        }

        if let Some(value) = read_env_var(env_var_names::AUTODETECT) {
            match parse_flag(&value) {
                Some(flag) => it.autodetect = flag,
                None => report_invalid(env_var_names::AUTODETECT, value, "0, 1, false, true"),
            }
        }

        if let Some(value) = read_env_var(env_var_names::BASE) {
            match parse_base_palette(&value) {
                Some(base) => it.base_palette = base,
                None => report_invalid(env_var_names::BASE, value, "xterm, vga, linux, windows"),
            }
        }

        if let Some(value) = read_env_var(env_var_names::X11_FILE) {
            it.x11_color_file = Some(PathBuf::from(value));
        }

        tracing::debug!(message = "Palette config from env", config = ?it);
        it
    }

    #[must_use]
    pub fn with_tier_override(mut self, tier: PaletteTier) -> Self {
        self.tier_override = Some(tier);
        self
    }

    #[must_use]
    pub fn with_autodetect(mut self, autodetect: bool) -> Self {
        self.autodetect = autodetect;
        self
    }

    #[must_use]
    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    #[must_use]
    pub fn with_base_palette(mut self, base_palette: BasePalette) -> Self {
        self.base_palette = base_palette;
        self
    }

    #[must_use]
    pub fn with_downgrade_truecolor(mut self, downgrade_truecolor: bool) -> Self {
        self.downgrade_truecolor = downgrade_truecolor;
        self
    }

    #[must_use]
    pub fn with_x11_color_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.x11_color_file = Some(path.into());
        self
    }

    /// The detected tier, or `None` ("undetermined") when detection is turned off.
    /// Overrides are not consulted here.
    #[must_use]
    pub fn detect_tier(&self) -> Option<PaletteTier> {
        self.autodetect
            .then(|| global_palette_tier::detect(self.stream))
    }

    /// The tier a context built from this config uses:
    /// [`Self::tier_override`], then [`global_palette_tier::try_get_override`], then
    /// [`Self::detect_tier`], and [`PaletteTier::Truecolor`] when detection is off.
    #[must_use]
    pub fn resolve_tier(&self) -> PaletteTier {
        if let Some(it) = self.tier_override {
            return it;
        }
        if let Some(it) = global_palette_tier::try_get_override() {
            return it;
        }
        self.detect_tier().unwrap_or(PaletteTier::Truecolor)
    }

    /// The X11 color files to try, in order.
    #[must_use]
    pub fn x11_color_file_candidates(&self) -> Vec<&Path> {
        match &self.x11_color_file {
            Some(path) => vec![path.as_path()],
            None => DEFAULT_X11_COLOR_FILES.iter().map(Path::new).collect(),
        }
    }
}

fn read_env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|it| !it.trim().is_empty())
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Same as [`BasePalette::from_str`], plus `linux` as an alias of
/// [`BasePalette::Vga`], since that is what the Linux console shows.
fn parse_base_palette(value: &str) -> Option<BasePalette> {
    if value.trim().eq_ignore_ascii_case("linux") {
        return Some(BasePalette::Vga);
    }
    BasePalette::from_str(value.trim()).ok()
}

fn report_invalid(var: &'static str, value: String, expected: &'static str) {
    let error = ConfigError::InvalidValue {
        var,
        value,
        expected,
    };
    tracing::warn!(message = "Ignoring env var", error = %error);
}
