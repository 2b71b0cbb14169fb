// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, RgbValue, global_color_table};

/// Converts between color representations, using the process wide
/// [`crate::ColorTable`] (see [`global_color_table`]) as the source of truth for what
/// an index looks like.
pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of a color in the 256-color ANSI palette approximating the
    /// `self` color.
    fn as_ansi(&self) -> AnsiValue;

    /// Returns the index of a color in the basic 16-color ANSI palette approximating the
    /// `self` color.
    fn as_basic_ansi(&self) -> AnsiValue;
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { global_color_table::get().nearest_extended(*self) }

    fn as_basic_ansi(&self) -> AnsiValue { global_color_table::get().nearest_basic(*self) }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { global_color_table::get().rgb_at(*self) }

    fn as_ansi(&self) -> AnsiValue { *self }

    fn as_basic_ansi(&self) -> AnsiValue {
        if self.is_basic() {
            *self
        } else {
            self.as_rgb().as_basic_ansi()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::TransformColor;
    use crate::{AnsiValue, BasePalette, RgbValue, global_color_table};

    #[test_case(RgbValue{red: 0, green: 0, blue: 0})]
    #[test_case(RgbValue{red: 0, green: 128, blue: 255})]
    #[test_case(RgbValue{red: 255, green: 255, blue: 255})]
    fn test_rgb_color_as_rgb(rgb_color: RgbValue) {
        assert_eq!(rgb_color.as_rgb(), rgb_color);
    }

    #[test_case(AnsiValue{index: 42}, RgbValue{red: 0, green: 215, blue: 135})]
    #[test_case(AnsiValue{index: 57}, RgbValue{red: 95, green: 0, blue: 255})]
    #[test_case(AnsiValue{index: 244}, RgbValue{red: 128, green: 128, blue: 128})]
    #[serial]
    fn test_ansi256_color_as_rgb(ansi_color: AnsiValue, rgb_color: RgbValue) {
        global_color_table::rebuild(BasePalette::Xterm);
        assert_eq!(ansi_color.as_rgb(), rgb_color);
    }

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    #[test_case(RgbValue{red: 95, green: 0, blue: 255}, 57)]
    #[test_case(RgbValue{red: 255, green: 135, blue: 0}, 208)]
    #[test_case(RgbValue{red: 128, green: 128, blue: 128}, 244)]
    #[serial]
    fn test_rgb_color_as_ansi256(rgb_color: RgbValue, index: u8) {
        global_color_table::rebuild(BasePalette::Xterm);
        assert_eq!(rgb_color.as_ansi(), AnsiValue { index });
    }

    #[serial]
    #[test]
    fn test_extended_index_as_basic() {
        global_color_table::rebuild(BasePalette::Xterm);
        // 196 is (255, 0, 0) in the cube, which is exactly xterm's bright red.
        assert_eq!(AnsiValue::new(196).as_basic_ansi(), AnsiValue::new(9));
        assert_eq!(AnsiValue::new(3).as_basic_ansi(), AnsiValue::new(3));
    }
}
