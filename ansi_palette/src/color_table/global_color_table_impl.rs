// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Process wide [`ColorTable`] used by nearest color lookups.
///
/// 1. The table is built lazily on first use, from [`BasePalette::detect`].
/// 2. It is rebuilt explicitly with [`global_color_table::rebuild`] (or implicitly by
///    [`global_color_table::get_for`]) when a different base palette is wanted.
///
/// Callers get an [`Arc`] snapshot, so a rebuild never changes a table someone is
/// already holding.
///
/// # Testing support
///
/// Any test that calls [`global_color_table::rebuild`] or
/// [`global_color_table::clear`] should be annotated with `#[serial]`.
pub mod global_color_table {
    use std::sync::{Arc, PoisonError, RwLock};

    use crate::{BasePalette, ColorTable};

    static COLOR_TABLE_GLOBAL: RwLock<Option<Arc<ColorTable>>> = RwLock::new(None);

    /// Get the current table, building it for the detected base palette if needed.
    pub fn get() -> Arc<ColorTable> {
        if let Some(it) = try_get() {
            return it;
        }
        rebuild(BasePalette::detect())
    }

    /// Get the current table, rebuilding it if it was built for a different base.
    pub fn get_for(base: BasePalette) -> Arc<ColorTable> {
        match try_get() {
            Some(it) if it.base() == base => it,
            _ => rebuild(base),
        }
    }

    /// Returns the table if one has been built, without building it.
    pub fn try_get() -> Option<Arc<ColorTable>> {
        COLOR_TABLE_GLOBAL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Discard the current table and build a new one from `base`.
    pub fn rebuild(base: BasePalette) -> Arc<ColorTable> {
        let table = Arc::new(ColorTable::new(base));
        *COLOR_TABLE_GLOBAL
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(table.clone());
        tracing::debug!(message = "Built color table", base = %base);
        table
    }

    pub fn clear() {
        *COLOR_TABLE_GLOBAL
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
