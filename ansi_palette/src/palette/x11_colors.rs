// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! X11 color names, for the `x` selector (eg: `xnavajowhite`, `xgray50`).
//!
//! The names come from the system `rgb.txt`, which is only read the first time an X11
//! name is requested. A missing or unreadable file is not an error until then, and even
//! then it just means the name is unknown.
//!
//! `rgb.txt` lines look like this (`!` starts a comment):
//!
//! ```text
//! ! $Xorg: rgb.txt,v 1.3 2000/08/17 19:54:00 cpqbld Exp $
//! 255 250 250		snow
//! 248 248 255		ghost white
//! 248 248 255		GhostWhite
//! ```
//!
//! Names are normalized by lowercasing and dropping spaces, so `ghost white` and
//! `GhostWhite` are both `ghostwhite`. The first definition of a name wins.

use std::{fs,
          path::{Path, PathBuf},
          sync::OnceLock};

use nom::{IResult, Parser,
          character::complete::{space0, space1, u8 as parse_u8},
          combinator::rest};
use rustc_hash::FxHashMap;

use crate::RgbValue;

pub type X11ColorMap = FxHashMap<String, RgbValue>;

/// Lazily loaded X11 color names. Shared by the foreground and background palettes of
/// a [`crate::PaletteContext`], so the file is read at most once per context.
#[derive(Debug, Default)]
pub struct X11ColorNames {
    candidates: Vec<PathBuf>,
    /// `None` inside the lock means loading was attempted and no file was readable.
    table: OnceLock<Option<X11ColorMap>>,
}

impl X11ColorNames {
    /// Names will be read from the first readable file in `candidates`.
    pub fn new<P: AsRef<Path>>(candidates: impl IntoIterator<Item = P>) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|it| it.as_ref().to_path_buf())
                .collect(),
            table: OnceLock::new(),
        }
    }

    /// Already parsed names, eg: from [`parse_rgb_txt`]. Nothing is read from disk.
    #[must_use]
    pub fn from_map(map: X11ColorMap) -> Self {
        Self {
            candidates: Vec::new(),
            table: OnceLock::from(Some(map)),
        }
    }

    /// Looks up `name`, normalized the same way as the file's names. The first call
    /// loads the file.
    pub fn lookup(&self, name: &str) -> Option<RgbValue> {
        let table = self.table.get_or_init(|| load_first_readable(&self.candidates));
        table.as_ref()?.get(&normalize_name(name)).copied()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool { self.table.get().is_some() }
}

fn load_first_readable(candidates: &[PathBuf]) -> Option<X11ColorMap> {
    for path in candidates {
        match fs::read_to_string(path) {
            Ok(content) => {
                let map = parse_rgb_txt(&content);
                tracing::debug!(
                    message = "Loaded X11 color names",
                    path = %path.display(),
                    count = map.len()
                );
                return Some(map);
            }
            Err(error) => {
                tracing::debug!(
                    message = "Could not read X11 color file",
                    path = %path.display(),
                    error = %error
                );
            }
        }
    }
    tracing::warn!(
        message = "No X11 color file found, X11 color names are unavailable",
        candidates = ?candidates
    );
    None
}

/// Parses the content of an `rgb.txt` file. Lines that don't parse are skipped.
#[must_use]
pub fn parse_rgb_txt(content: &str) -> X11ColorMap {
    let mut map = X11ColorMap::default();
    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('!') || trimmed.starts_with('#') {
            continue;
        }
        let Ok((_, (rgb, name))) = parse_rgb_txt_line(trimmed) else {
            continue;
        };
        let name = normalize_name(name);
        if name.is_empty() {
            continue;
        }
        map.entry(name).or_insert(rgb);
    }
    map
}

/// `R G B name`, with any amount of blanks between the fields.
fn parse_rgb_txt_line(input: &str) -> IResult<&str, (RgbValue, &str)> {
    (space0, parse_u8, space1, parse_u8, space1, parse_u8, space1, rest)
        .map(|(_, red, _, green, _, blue, _, name)| (RgbValue { red, green, blue }, name))
        .parse(input)
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|it| !it.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
