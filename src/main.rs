use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tapcalc::{Calculator, Key, Settings};

/// Presses calculator buttons and prints the display
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file with display settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decimal places for fractional results (overrides the config file)
    #[arg(short, long)]
    decimals: Option<usize>,

    /// Buttons: 0-9 . + - * / = C, or #TAG for a raw operation tag
    #[arg(required = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let Some(path) = &args.config else {
        return Ok(Settings::resolve(None, args.decimals)?);
    };
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Settings::resolve(Some(&text), args.decimals).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = load_settings(&args)?;
    let mut calc = Calculator::with_settings(settings);

    for k in &args.keys {
        let key: Key = k.parse()?;
        calc.press(key);
    }

    println!("{}", calc.buffer());
    println!("{}", calc.result());
    Ok(())
}
