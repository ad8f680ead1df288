//! koinomics-mulshift: derive integer multiply-shift pairs for decay rates.
//!
//! Each output line is `(hex multiplier, shift)` such that `(x * mul) >>
//! shift` approximates `x * rate`. With no arguments, prints the reference
//! set the chain's decay and phantom RC constants came from.

use anyhow::{Context, Result};
use clap::Parser;

use koinomics_core::MulShift;
use koinomics_core::constants::{GENT_PER_BLOCK, RC_PER_MANA};

/// CLI arguments for the multiply-shift deriver.
#[derive(Debug, Parser)]
#[command(name = "koinomics-mulshift")]
#[command(about = "Derive (multiplier, shift) pairs for fractional decay rates", long_about = None)]
struct Args {
    /// Multiplier bit width.
    #[arg(long, default_value_t = 32)]
    bits: u32,

    /// Derive for a half-life in blocks (repeatable).
    #[arg(long = "half-life")]
    half_lives: Vec<f64>,

    /// Derive for a direct fractional rate (repeatable).
    #[arg(long = "rate")]
    rates: Vec<f64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.half_lives.is_empty() && args.rates.is_empty() {
        return print_reference_set(args.bits);
    }

    for &half_life in &args.half_lives {
        let ms = MulShift::from_half_life(half_life, args.bits)
            .with_context(|| format!("half-life {half_life}"))?;
        println!("{ms}");
    }
    for &rate in &args.rates {
        let ms =
            MulShift::from_rate(rate, args.bits).with_context(|| format!("rate {rate}"))?;
        println!("{ms}");
    }

    Ok(())
}

/// The derivations behind the chain's decay and phantom RC constants.
fn print_reference_set(bits: u32) -> Result<()> {
    // 1000 blocks, a month of 10-second blocks, a month of 3-second blocks.
    for half_life in [1_000.0, 259_200.0, 864_000.0] {
        println!("{}", MulShift::from_half_life(half_life, bits)?);
    }

    // Phantom RC rate (the mana generated by 0.1% of supply), per whole
    // KOIN and per satoshi; the satoshi form folds in RC_PER_MANA.
    let phantom = 0.001 * GENT_PER_BLOCK;
    println!("{}", MulShift::from_rate(phantom, bits)?);
    println!("{}", MulShift::from_rate(phantom * RC_PER_MANA as f64, bits)?);

    Ok(())
}
