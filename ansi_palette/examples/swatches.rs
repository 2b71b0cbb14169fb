// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example swatches`. Set `ANSI_PALETTE_TIER` (none, basic,
//! extended, truecolor) to see how the same code degrades on lesser terminals.

use std::io::{Write, stdout};

use ansi_palette::{PaletteConfig, PaletteContext, StyleToken, write_swatches};
use miette::IntoDiagnostic;

fn main() -> miette::Result<()> {
    let config = PaletteConfig::from_env();
    let mut ctx = PaletteContext::new(&config);
    println!("Palette tier: {}", ctx.tier);

    write_swatches(&mut ctx, &mut stdout().lock())?;

    // Tokens compose without changing their operands.
    let warn = ctx.fg.resolve("lightyellow")?;
    let banner = ctx.bg.resolve("wslateblue")?;
    let loud = ctx.fx.resolve("bold")?;
    let both = StyleToken::compose_all(&[&warn, &loud]);
    println!("{}", both.wrap(" composed ", &[&banner]));
    println!("{}", warn.wrap(" just the foreground ", &[]));

    // Scoped styles always write their terminator, even on early return.
    let italic = ctx.fx.resolve("italic")?;
    italic
        .scoped(&mut stdout().lock(), |out| writeln!(out, "inside a scope"))
        .into_diagnostic()?
        .into_diagnostic()?;
    println!();

    Ok(())
}
