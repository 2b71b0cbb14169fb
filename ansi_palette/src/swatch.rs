// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Swatches of everything a [`PaletteContext`] can show, used by the `palette-demo`
//! binary and the `swatches` example.
//!
//! Every piece of text goes through [`crate::StyleToken::wrap`], so under
//! [`crate::PaletteTier::None`] the output is the plain labels and nothing else.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::{AnsiValue, EFFECT_ATTRIBUTES, FOREGROUND_ATTRIBUTES, PaletteContext, RgbValue,
            StyleToken, TransformColor};

const GRADIENT_STEPS: u16 = 32;

/// Writes all the sections below, in order.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_swatches(ctx: &mut PaletteContext, writer: &mut impl Write) -> miette::Result<()> {
    write_plain_names(ctx, writer)?;
    write_effects(ctx, writer)?;
    write_indexed_ramp(ctx, writer)?;
    write_truecolor_gradient(ctx, writer)?;
    Ok(())
}

/// Every foreground name, in its own color.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_plain_names(ctx: &mut PaletteContext, writer: &mut impl Write) -> miette::Result<()> {
    write_heading(ctx, writer, "Plain names")?;
    let mut line = String::new();
    for (name, _) in FOREGROUND_ATTRIBUTES {
        let token = ctx.fg.resolve(name)?;
        line.push_str(&token.wrap(name, &[]));
        line.push(' ');
    }
    writeln!(writer, "{}", line.trim_end()).into_diagnostic()
}

/// Every effect, applied to its own name.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_effects(ctx: &mut PaletteContext, writer: &mut impl Write) -> miette::Result<()> {
    write_heading(ctx, writer, "Effects")?;
    let mut line = String::new();
    for (name, code) in EFFECT_ATTRIBUTES {
        // The reset codes have nothing to show.
        if code == 0 {
            continue;
        }
        let token = ctx.fx.resolve(name)?;
        line.push_str(&token.wrap(name, &[]));
        line.push(' ');
    }
    writeln!(writer, "{}", line.trim_end()).into_diagnostic()
}

/// The 256 color ramp: the 16 base colors, the 6×6×6 cube (one row per red step),
/// then the grayscale ramp. Labels are black on light cells and white on dark ones.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_indexed_ramp(ctx: &mut PaletteContext, writer: &mut impl Write) -> miette::Result<()> {
    write_heading(ctx, writer, "Indexed colors")?;
    let dark_label = ctx.fg.resolve("black")?;
    let light_label = ctx.fg.resolve("lightwhite")?;
    let rows: [(u16, u16); 8] = [
        (0, 16),
        (16, 52),
        (52, 88),
        (88, 124),
        (124, 160),
        (160, 196),
        (196, 232),
        (232, 256),
    ];
    for (start, end) in rows {
        let mut line = String::new();
        for index in start..end {
            let token = ctx.bg.resolve(&format!("i{index}"))?;
            let label = match u8::try_from(index) {
                Ok(it) if is_light(AnsiValue::new(it).as_rgb()) => &dark_label,
                _ => &light_label,
            };
            line.push_str(&token.wrap(&format!("{index:>4}"), &[label]));
        }
        writeln!(writer, "{line}").into_diagnostic()?;
    }
    Ok(())
}

/// A red to blue gradient on the background.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_truecolor_gradient(
    ctx: &mut PaletteContext,
    writer: &mut impl Write,
) -> miette::Result<()> {
    write_heading(ctx, writer, "Truecolor gradient")?;
    let mut line = String::new();
    for step in 0..GRADIENT_STEPS {
        let blue = step * 255 / (GRADIENT_STEPS - 1);
        let red = 255 - blue;
        let token = ctx.bg.resolve(&format!("t{red:02x}00{blue:02x}"))?;
        line.push_str(&token.wrap(" ", &[]));
    }
    writeln!(writer, "{line}").into_diagnostic()
}

/// Perceived brightness, ITU-R BT.601 weights.
fn is_light(rgb: RgbValue) -> bool {
    let luma = 299 * u32::from(rgb.red) + 587 * u32::from(rgb.green) + 114 * u32::from(rgb.blue);
    luma > 127_500
}

fn write_heading(
    ctx: &mut PaletteContext,
    writer: &mut impl Write,
    text: &str,
) -> miette::Result<()> {
    let bold = ctx.fx.resolve("bold")?;
    let underline = ctx.fx.resolve("underline")?;
    let heading = StyleToken::compose_all(&[&bold, &underline]);
    writeln!(writer, "{}", heading.wrap(text, &[])).into_diagnostic()
}
