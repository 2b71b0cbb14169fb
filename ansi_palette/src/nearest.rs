// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Nearest color search over a [`crate::ColorTable`] view (or any slice of
//! [`RgbValue`]).
//!
//! The search is a linear scan. Ties go to the entry seen first, so the result depends
//! on the table's order and not on which entries happen to hold equal values. For
//! example pure black is both index 0 and index 16 in the xterm table, and the answer
//! is always 0.

use crate::{AnsiValue, RgbValue};

/// A distance between two colors. Only the ordering matters, so implementations are
/// free to skip square roots.
pub trait ColorDistance {
    fn distance(&self, lhs: RgbValue, rhs: RgbValue) -> u32;
}

/// Squared Euclidean distance in RGB space. This is the default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclideanRgb;

impl ColorDistance for EuclideanRgb {
    fn distance(&self, lhs: RgbValue, rhs: RgbValue) -> u32 {
        let red = u32::from(lhs.red.abs_diff(rhs.red));
        let green = u32::from(lhs.green.abs_diff(rhs.green));
        let blue = u32::from(lhs.blue.abs_diff(rhs.blue));
        red * red + green * green + blue * blue
    }
}

/// "Redmean" weighted distance. Cheap and noticeably closer to perception than plain
/// RGB, since green differences dominate and the red/blue weights follow how red the
/// pair is.
///
/// More info: <https://www.compuphase.com/cmetric.htm>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redmean;

impl ColorDistance for Redmean {
    fn distance(&self, lhs: RgbValue, rhs: RgbValue) -> u32 {
        let red_mean = (u32::from(lhs.red) + u32::from(rhs.red)) / 2;
        let red = u32::from(lhs.red.abs_diff(rhs.red));
        let green = u32::from(lhs.green.abs_diff(rhs.green));
        let blue = u32::from(lhs.blue.abs_diff(rhs.blue));

        let red_weight = ((512 + red_mean) * red * red) >> 8;
        let green_weight = 4 * green * green;
        let blue_weight = ((767 - red_mean) * blue * blue) >> 8;

        red_weight + green_weight + blue_weight
    }
}

/// Index of the entry in `table` closest to `target` by [`EuclideanRgb`]. Returns
/// `None` only for an empty table.
#[must_use]
pub fn nearest_index(target: RgbValue, table: &[RgbValue]) -> Option<AnsiValue> {
    nearest_index_with(&EuclideanRgb, target, table)
}

/// Same as [`nearest_index`] with a caller supplied metric.
///
/// Only the first 256 entries are considered, since the result has to fit an
/// [`AnsiValue`].
#[must_use]
pub fn nearest_index_with(
    metric: &impl ColorDistance,
    target: RgbValue,
    table: &[RgbValue],
) -> Option<AnsiValue> {
    let mut best: Option<(u8, u32)> = None;

    for (index, entry) in (0..=u8::MAX).zip(table.iter()) {
        let distance = metric.distance(target, *entry);
        match best {
            // Strictly smaller, so the first minimum wins.
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
        if distance == 0 {
            break;
        }
    }

    best.map(|(index, _)| AnsiValue::new(index))
}
