// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Palette namespaces: lazily resolve attribute names into validated, cached
//! [`crate::StyleToken`]s.
//!
//! Resolving a name goes through these steps:
//! 1. Cache lookup.
//! 2. Plain name table ([`lookup_plain_attribute`]), eg: `red`, `bold`.
//! 3. Selector parsing ([`Selector::parse`]), eg: `i208`, `tb0b`, `wtan`. Malformed
//!    payloads are errors.
//! 4. Tier gating. Attributes the tier can't show become inert tokens.
//! 5. Cache insert.

// Attach.
mod attribute_tables;
mod palette_context;
mod palette_namespace;
mod selector;
mod web_colors;
mod x11_colors;

// Re-export.
pub use attribute_tables::*;
pub use palette_context::*;
pub use palette_namespace::*;
pub use selector::*;
pub use web_colors::*;
pub use x11_colors::*;
