pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use std::path::Path;

pub use error::ConvertError;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);
    convert(&args)
}

/// Default filter is `warn`; `RUST_LOG` still takes precedence.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

pub fn convert(args: &cli::Cli) -> anyhow::Result<()> {
    let name = level_name(&args.input)?;

    // 1. ── Parse ──────────────────────────────────────────────────────
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let level = parser::load_from_json(&json).with_context(|| "Parsing input JSON")?;

    // 2. ── Assemble ───────────────────────────────────────────────────
    let text = writer::elm::serialize(&args.module, &name, &level)
        .with_context(|| format!("Converting level {name}"))?;

    // 3. ── Write output ───────────────────────────────────────────────
    let path = writer::elm::emit(&text, &args.output, &args.file_name)
        .with_context(|| format!("Writing {}", args.output.display()))?;
    log::info!("{} bytes written to {}", text.len(), path.display());

    println!("Written {} into {}", name, args.output.display());
    Ok(())
}

/// Base file name without extension, used as the Elm binding name.
pub fn level_name(input: &Path) -> anyhow::Result<String> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| format!("{} has no file name", input.display()))
}
