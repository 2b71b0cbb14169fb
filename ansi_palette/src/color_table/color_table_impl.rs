// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, BasePalette, ColorDistance, EuclideanRgb, RgbValue, nearest_index_with};

/// Breakpoints of the 6×6×6 color cube (indices 16-231), per channel.
pub const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Number of steps of the grayscale ramp (indices 232-255).
pub const GRAYSCALE_STEPS: usize = 24;

pub const BASIC_TABLE_LEN: usize = 16;
pub const EXTENDED_TABLE_LEN: usize = 256;

/// Index addressed RGB triples for a terminal's fixed color ramp.
///
/// - 0-15: the [`BasePalette`] colors.
/// - 16-231: the cube, row major in `(r, g, b)` order, so index `16 + 36r + 6g + b`.
/// - 232-255: grays `8 + 10 × step`.
///
/// The table is immutable once built. [`ColorTable::basic`] is simply the first 16
/// entries, so the basic and extended views always agree on indices 0-15.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    base: BasePalette,
    entries: [RgbValue; EXTENDED_TABLE_LEN],
}

impl ColorTable {
    #[must_use]
    pub fn new(base: BasePalette) -> Self {
        let mut entries = [RgbValue::default(); EXTENDED_TABLE_LEN];

        entries[..BASIC_TABLE_LEN].copy_from_slice(base.colors());

        let mut index = BASIC_TABLE_LEN;
        for red in CUBE_STEPS {
            for green in CUBE_STEPS {
                for blue in CUBE_STEPS {
                    entries[index] = RgbValue::from_u8(red, green, blue);
                    index += 1;
                }
            }
        }

        for step in 0..GRAYSCALE_STEPS {
            #[allow(clippy::cast_possible_truncation)]
            let gray = (8 + 10 * step) as u8;
            entries[index] = RgbValue::from_u8(gray, gray, gray);
            index += 1;
        }

        debug_assert_eq!(index, EXTENDED_TABLE_LEN);

        Self { base, entries }
    }

    #[must_use]
    pub fn base(&self) -> BasePalette { self.base }

    /// The 16 entry view.
    #[must_use]
    pub fn basic(&self) -> &[RgbValue] { &self.entries[..BASIC_TABLE_LEN] }

    /// The full 256 entry view.
    #[must_use]
    pub fn extended(&self) -> &[RgbValue] { &self.entries }

    #[must_use]
    pub fn rgb_at(&self, ansi: AnsiValue) -> RgbValue { self.entries[ansi.index as usize] }

    /// Nearest entry among all 256, using the default [`EuclideanRgb`] metric.
    #[must_use]
    pub fn nearest_extended(&self, target: RgbValue) -> AnsiValue {
        self.nearest_extended_with(&EuclideanRgb, target)
    }

    /// Nearest entry among the first 16, using the default [`EuclideanRgb`] metric.
    #[must_use]
    pub fn nearest_basic(&self, target: RgbValue) -> AnsiValue {
        self.nearest_basic_with(&EuclideanRgb, target)
    }

    #[must_use]
    pub fn nearest_extended_with(
        &self,
        metric: &impl ColorDistance,
        target: RgbValue,
    ) -> AnsiValue {
        // The table is never empty, so the fallback is unreachable.
        nearest_index_with(metric, target, self.extended()).unwrap_or_default()
    }

    #[must_use]
    pub fn nearest_basic_with(&self, metric: &impl ColorDistance, target: RgbValue) -> AnsiValue {
        nearest_index_with(metric, target, self.basic()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_lengths() {
        let table = ColorTable::new(BasePalette::Xterm);
        assert_eq!(table.basic().len(), 16);
        assert_eq!(table.extended().len(), 256);
        assert_eq!(table.basic(), &table.extended()[..16]);
    }

    #[test_case(BasePalette::Xterm)]
    #[test_case(BasePalette::Vga)]
    #[test_case(BasePalette::Windows)]
    fn test_base_entries_come_from_base_palette(base: BasePalette) {
        let table = ColorTable::new(base);
        assert_eq!(table.basic(), base.colors().as_slice());
        assert_eq!(table.base(), base);
    }

    #[test_case(16, (0, 0, 0))]
    #[test_case(21, (0, 0, 255))]
    #[test_case(46, (0, 255, 0))]
    #[test_case(196, (255, 0, 0))]
    #[test_case(208, (255, 135, 0))]
    #[test_case(231, (255, 255, 255))]
    #[test_case(232, (8, 8, 8))]
    #[test_case(244, (128, 128, 128))]
    #[test_case(255, (238, 238, 238))]
    fn test_cube_and_grayscale_entries(index: u8, expected: (u8, u8, u8)) {
        let table = ColorTable::new(BasePalette::Vga);
        assert_eq!(table.rgb_at(AnsiValue::new(index)), RgbValue::from(expected));
    }

    #[test]
    fn test_cube_is_row_major() {
        let table = ColorTable::new(BasePalette::Xterm);
        for (r, red) in CUBE_STEPS.iter().enumerate() {
            for (g, green) in CUBE_STEPS.iter().enumerate() {
                for (b, blue) in CUBE_STEPS.iter().enumerate() {
                    let index = 16 + 36 * r + 6 * g + b;
                    assert_eq!(
                        table.extended()[index],
                        RgbValue::from_u8(*red, *green, *blue)
                    );
                }
            }
        }
    }
}
