// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints swatches of the detected (or forced) palette, then resolves any attribute
//! names given on the command line.
//!
//! ```text
//! palette-demo                         # everything the terminal supports
//! palette-demo --tier basic            # what a 16 color terminal would see
//! NO_COLOR=1 palette-demo              # plain text
//! palette-demo i208 tb0b xnavajowhite  # try some attribute names
//! ```

use std::io::{Write, stdout};

use ansi_palette::{BasePalette, Category, PaletteConfig, PaletteContext, PaletteTier,
                   try_init_tracing, write_swatches};
use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "palette-demo")]
#[command(about = "Show what ansi_palette renders on this terminal")]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        long,
        short = 't',
        help = "Force a palette tier instead of detecting it (none, basic, extended, truecolor)"
    )]
    pub tier: Option<PaletteTier>,

    #[arg(
        long,
        help = "Skip capability detection, assume truecolor unless --tier is given"
    )]
    pub no_detect: bool,

    #[arg(long, short = 'b', help = "Base palette for nearest color lookups")]
    pub base: Option<BasePalette>,

    #[arg(
        long,
        short = 'd',
        help = "Approximate truecolor on the 256 color ramp when truecolor is unavailable"
    )]
    pub downgrade: bool,

    #[arg(long, short = 'c', value_enum, default_value_t = Layer::Fg, help = "Namespace for the given names")]
    pub category: Layer,

    #[arg(long, short = 'l', value_enum, default_value_t = LogLevel::Off, help = "Log to stderr at this level")]
    pub log_level: LogLevel,

    #[arg(long, help = "Only resolve the given names, skip the swatches")]
    pub no_swatches: bool,

    #[arg(value_name = "name", help = "Attribute names to resolve, eg: red i208 tb0b wtan")]
    pub names: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Layer {
    Fg,
    Bg,
    Fx,
    Defx,
}

impl From<Layer> for Category {
    fn from(value: Layer) -> Self {
        match value {
            Layer::Fg => Category::Foreground,
            Layer::Bg => Category::Background,
            Layer::Fx => Category::Effect,
            Layer::Defx => Category::EffectTerminator,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    try_init_tracing(cli_arg.log_level.into())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start palette-demo", cli_arg = ?cli_arg);

    let config = build_config(&cli_arg);
    let mut ctx = PaletteContext::new(&config);

    let mut out = stdout().lock();
    writeln!(out, "Palette tier: {}", ctx.tier).into_diagnostic()?;

    if !cli_arg.no_swatches {
        write_swatches(&mut ctx, &mut out)?;
    }

    let category = Category::from(cli_arg.category);
    let mut failures = 0;
    for name in &cli_arg.names {
        match ctx.resolve(category, name) {
            Ok(token) => {
                let label = if token.is_active() {
                    format!("{name} ({})", token.render().escape_debug())
                } else {
                    format!("{name} (inert at tier {})", ctx.tier)
                };
                writeln!(out, "{}", token.wrap(&label, &[])).into_diagnostic()?;
            }
            Err(error) => {
                failures += 1;
                eprintln!("{:?}", miette::Report::new(error));
            }
        }
    }
    out.flush().into_diagnostic()?;

    if failures > 0 {
        miette::bail!("{failures} attribute name(s) could not be resolved");
    }
    Ok(())
}

fn build_config(cli_arg: &CLIArg) -> PaletteConfig {
    let mut config = PaletteConfig::from_env();
    if let Some(tier) = cli_arg.tier {
        config = config.with_tier_override(tier);
    }
    if cli_arg.no_detect {
        config = config.with_autodetect(false);
    }
    if let Some(base) = cli_arg.base {
        config = config.with_base_palette(base);
    }
    if cli_arg.downgrade {
        config = config.with_downgrade_truecolor(true);
    }
    config
}
