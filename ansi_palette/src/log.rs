// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for binaries. The library itself only emits events, it never installs
//! a subscriber.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global subscriber that writes formatted events at `level` and above to
/// stderr, so they never mix with the styled output on stdout. Does nothing for
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_init_tracing(level: LevelFilter) -> miette::Result<()> {
    if level == LevelFilter::OFF {
        return Ok(());
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
}
