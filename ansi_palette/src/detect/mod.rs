// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capability detection: pick a [`PaletteTier`] from environment variables and the
//! tty-ness of the output stream.
//!
//! - [`determine_palette_tier`] is the pure rule set, easy to test with hand made
//!   [`EnvSignals`].
//! - [`examine_env_vars_to_determine_palette_tier`] feeds it the real environment.
//! - [`global_palette_tier`] memoizes the answer and lets callers (and tests) override
//!   it.

// Attach.
mod detect_palette_tier;
mod palette_tier;

// Re-export.
pub use detect_palette_tier::*;
pub use palette_tier::*;
