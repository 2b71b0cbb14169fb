// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          io::IsTerminal,
          sync::atomic::{AtomicI8, Ordering}};

use crate::PaletteTier;

/// Global state which can be used to:
/// 1. Override the palette tier, regardless of the environment.
/// 2. Memoize the result of [`examine_env_vars_to_determine_palette_tier`], per
///    [`Stream`].
///
/// This is global because the answer depends on the process environment, which is
/// global too.
pub mod global_palette_tier {
    use super::*;

    const NOT_SET_VALUE: i8 = -1;

    static TIER_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static STDOUT_TIER_CACHE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static STDERR_TIER_CACHE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    fn cache_for(stream: Stream) -> &'static AtomicI8 {
        match stream {
            Stream::Stdout => &STDOUT_TIER_CACHE,
            Stream::Stderr => &STDERR_TIER_CACHE,
        }
    }

    /// This is the main function that is used to determine the palette tier.
    ///
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, if a previous call already examined the environment for `stream`,
    ///   that result is returned.
    /// - Otherwise, the value will be determined by calling
    ///   [`examine_env_vars_to_determine_palette_tier`] and memoized.
    pub fn detect(stream: Stream) -> PaletteTier {
        if let Some(it) = try_get_override() {
            return it;
        }
        if let Some(it) = try_get_cached(stream) {
            return it;
        }
        let it = examine_env_vars_to_determine_palette_tier(stream);
        cache_for(stream).store(i8::from(it), Ordering::SeqCst);
        it
    }

    /// Override the palette tier. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: PaletteTier) {
        TIER_OVERRIDE.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { TIER_OVERRIDE.store(NOT_SET_VALUE, Ordering::SeqCst); }

    /// Forget the memoized detection results, so the next [`detect()`] reads the
    /// environment again.
    pub fn clear_cache() {
        STDOUT_TIER_CACHE.store(NOT_SET_VALUE, Ordering::SeqCst);
        STDERR_TIER_CACHE.store(NOT_SET_VALUE, Ordering::SeqCst);
    }

    /// Get the override value, if [`set_override`] has been called.
    #[must_use]
    pub fn try_get_override() -> Option<PaletteTier> {
        PaletteTier::try_from(TIER_OVERRIDE.load(Ordering::SeqCst)).ok()
    }

    /// Get the memoized detection result for `stream`, if there is one.
    #[must_use]
    pub fn try_get_cached(stream: Stream) -> Option<PaletteTier> {
        PaletteTier::try_from(cache_for(stream).load(Ordering::SeqCst)).ok()
    }
}

/// The stream whose tty-ness counts when detecting color support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Everything [`determine_palette_tier`] looks at. Unset variables are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvSignals {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub ansicon: Option<String>,
    pub clicolor: Option<String>,
    pub clicolor_force: Option<String>,
    pub no_color: Option<String>,
    pub is_tty: bool,
}

impl EnvSignals {
    /// Read the process environment and the tty-ness of `stream`.
    #[must_use]
    pub fn from_env(stream: Stream) -> Self {
        Self {
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            ansicon: env::var("ANSICON").ok(),
            clicolor: env::var("CLICOLOR").ok(),
            clicolor_force: env::var("CLICOLOR_FORCE").ok(),
            no_color: env::var("NO_COLOR").ok(),
            is_tty: is_a_tty(stream),
        }
    }
}

/// Determine the palette tier heuristically, from the environment variables and the
/// tty-ness of `stream`.
pub fn examine_env_vars_to_determine_palette_tier(stream: Stream) -> PaletteTier {
    let signals = EnvSignals::from_env(stream);
    let tier = determine_palette_tier(&signals);
    // % is Display, ? is Debug.
    tracing::debug!(
        message = "Detected palette tier",
        stream = ?stream,
        signals = ?signals,
        tier = %tier
    );
    tier
}

/// The detection rules, in priority order:
/// 1. A truthy `CLICOLOR_FORCE` (`1`, `true`, `yes`, `on`, or any non-zero number)
///    forces color, tty or not. If nothing below picks a tier, the result is
///    [`PaletteTier::Basic`]. `0`, `false`, `no`, `off` and anything unrecognized do
///    not force.
/// 2. Otherwise color needs a tty, and neither `NO_COLOR` (any value) nor
///    `CLICOLOR=0`.
/// 3. The tier is then the highest of:
///    - [`PaletteTier::Basic`] if `TERM` contains `color` or is `linux`,
///    - [`PaletteTier::Extended`] if `TERM` contains `256color` or `ANSICON` is set,
///    - [`PaletteTier::Truecolor`] if `COLORTERM` is `truecolor` or `24bit`.
///
/// No signals at all means [`PaletteTier::None`].
#[must_use]
pub fn determine_palette_tier(signals: &EnvSignals) -> PaletteTier {
    let is_forced = signals
        .clicolor_force
        .as_deref()
        .is_some_and(helpers::is_truthy);

    if !is_forced {
        let is_disabled =
            signals.no_color.is_some() || signals.clicolor.as_deref() == Some("0");
        if !signals.is_tty || is_disabled {
            return PaletteTier::None;
        }
    }

    let term = signals.term.as_deref().unwrap_or_default();
    let mut tier = PaletteTier::None;

    if term.contains("color") || term == "linux" {
        tier = PaletteTier::Basic;
    }
    if term.contains("256color") || signals.ansicon.is_some() {
        tier = PaletteTier::Extended;
    }
    if matches!(signals.colorterm.as_deref(), Some("truecolor" | "24bit")) {
        tier = PaletteTier::Truecolor;
    }

    if is_forced && tier == PaletteTier::None {
        tier = PaletteTier::Basic;
    }

    tier
}

mod helpers {
    use super::*;
    use crate::config::parse_flag;

    /// Same flag words as the `ANSI_PALETTE_*` variables, plus non-zero numbers.
    pub(crate) fn is_truthy(value: &str) -> bool {
        match parse_flag(value) {
            Some(flag) => flag,
            None => value.trim().parse::<i64>().is_ok_and(|it| it != 0),
        }
    }

    pub fn is_a_tty(stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }
}
pub use helpers::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::*;

    fn tty_with(term: &str) -> EnvSignals {
        EnvSignals {
            term: Some(term.into()),
            is_tty: true,
            ..Default::default()
        }
    }

    #[test_case("dumb", PaletteTier::None)]
    #[test_case("xterm", PaletteTier::None)]
    #[test_case("xterm-color", PaletteTier::Basic)]
    #[test_case("linux", PaletteTier::Basic)]
    #[test_case("xterm-256color", PaletteTier::Extended)]
    #[test_case("screen-256color", PaletteTier::Extended)]
    fn test_term_only(term: &str, expected: PaletteTier) {
        assert_eq!(determine_palette_tier(&tty_with(term)), expected);
    }

    #[test]
    fn test_no_signals_is_none() {
        assert_eq!(determine_palette_tier(&EnvSignals::default()), PaletteTier::None);
        let signals = EnvSignals {
            is_tty: true,
            ..Default::default()
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::None);
    }

    #[test_case("truecolor")]
    #[test_case("24bit")]
    fn test_colorterm_upgrades_to_truecolor(colorterm: &str) {
        let signals = EnvSignals {
            colorterm: Some(colorterm.into()),
            ..tty_with("xterm-256color")
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::Truecolor);
    }

    #[test]
    fn test_ansicon_means_extended() {
        let signals = EnvSignals {
            ansicon: Some("80x25 (80x25)".into()),
            ..tty_with("")
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::Extended);
    }

    #[test]
    fn test_not_a_tty_is_none() {
        let signals = EnvSignals {
            is_tty: false,
            colorterm: Some("truecolor".into()),
            ..tty_with("xterm-256color")
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::None);
    }

    #[test_case(Some("1"), None)]
    #[test_case(Some(""), None)]
    #[test_case(None, Some("0"))]
    fn test_disabled(no_color: Option<&str>, clicolor: Option<&str>) {
        let signals = EnvSignals {
            no_color: no_color.map(String::from),
            clicolor: clicolor.map(String::from),
            colorterm: Some("truecolor".into()),
            ..tty_with("xterm-256color")
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::None);
    }

    #[test]
    fn test_clicolor_one_does_not_disable() {
        let signals = EnvSignals {
            clicolor: Some("1".into()),
            ..tty_with("xterm-256color")
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::Extended);
    }

    #[test]
    fn test_forced_without_tty() {
        let signals = EnvSignals {
            clicolor_force: Some("1".into()),
            ..Default::default()
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::Basic);

        let signals = EnvSignals {
            clicolor_force: Some("1".into()),
            no_color: Some("1".into()),
            colorterm: Some("24bit".into()),
            ..Default::default()
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::Truecolor);
    }

    #[test_case("0")]
    #[test_case("")]
    #[test_case("false")]
    #[test_case("no")]
    #[test_case("OFF")]
    #[test_case("bogus")]
    fn test_falsy_force_is_not_forced(value: &str) {
        let signals = EnvSignals {
            clicolor_force: Some(value.into()),
            term: Some("xterm-256color".into()),
            ..Default::default()
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::None);

        // Nor does it override NO_COLOR on a tty.
        let signals = EnvSignals {
            no_color: Some("1".into()),
            is_tty: true,
            ..signals
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::None);
    }

    #[test_case("1")]
    #[test_case("true")]
    #[test_case("Yes")]
    #[test_case("on")]
    #[test_case("2")]
    fn test_truthy_force_is_forced(value: &str) {
        let signals = EnvSignals {
            clicolor_force: Some(value.into()),
            term: Some("xterm-256color".into()),
            ..Default::default()
        };
        assert_eq!(determine_palette_tier(&signals), PaletteTier::Extended);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        unsafe {
            env::set_var("TERM", "xterm-256color");
            env::set_var("COLORTERM", "truecolor");
            env::set_var("NO_COLOR", "1");
            env::remove_var("ANSICON");
            env::remove_var("CLICOLOR");
            env::remove_var("CLICOLOR_FORCE");
        }
        let signals = EnvSignals::from_env(Stream::Stdout);
        assert_eq!(signals.term.as_deref(), Some("xterm-256color"));
        assert_eq!(signals.colorterm.as_deref(), Some("truecolor"));
        assert_eq!(signals.no_color.as_deref(), Some("1"));
        assert_eq!(signals.ansicon, None);
        assert_eq!(
            examine_env_vars_to_determine_palette_tier(Stream::Stdout),
            PaletteTier::None
        );
        unsafe {
            env::remove_var("COLORTERM");
            env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_override_cycle() {
        global_palette_tier::set_override(PaletteTier::Extended);
        assert_eq!(
            global_palette_tier::try_get_override(),
            Some(PaletteTier::Extended)
        );
        assert_eq!(global_palette_tier::detect(Stream::Stdout), PaletteTier::Extended);
        assert_eq!(global_palette_tier::detect(Stream::Stderr), PaletteTier::Extended);

        global_palette_tier::clear_override();
        assert_eq!(global_palette_tier::try_get_override(), None);
    }

    #[test]
    #[serial]
    fn test_detect_memoizes_per_stream() {
        global_palette_tier::clear_override();
        global_palette_tier::clear_cache();
        assert_eq!(global_palette_tier::try_get_cached(Stream::Stderr), None);

        let tier = global_palette_tier::detect(Stream::Stderr);
        assert_eq!(global_palette_tier::try_get_cached(Stream::Stderr), Some(tier));
        assert_eq!(global_palette_tier::try_get_cached(Stream::Stdout), None);

        global_palette_tier::clear_cache();
        assert_eq!(global_palette_tier::try_get_cached(Stream::Stderr), None);
    }
}
