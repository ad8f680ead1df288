//! koinomics-eqm: equilibrium pricing tables for the resource markets.
//!
//! Prints, for each per-block budget, the equilibrium resource supply, RC
//! reserve, and implied price across a utilization sweep. These tables are
//! where the genesis market constants come from.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use koinomics_core::constants::{
    COMPUTE_BUDGET_PER_BLOCK, DISK_BUDGET_PER_BLOCK, NETWORK_BUDGET_PER_BLOCK,
};
use koinomics_model::equilibrium::{EquilibriumPoint, sweep};

/// CLI arguments for the equilibrium calculator.
#[derive(Debug, Parser)]
#[command(name = "koinomics-eqm")]
#[command(about = "Equilibrium pricing tables for the KOIN resource markets", long_about = None)]
struct Args {
    /// Emit the tables as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// One budget's sweep, labelled for JSON output.
#[derive(Debug, Serialize)]
struct BudgetTable {
    resource: &'static str,
    block_budget: u64,
    points: Vec<EquilibriumPoint>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the tables stay clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let tables: Vec<BudgetTable> = [
        ("disk", DISK_BUDGET_PER_BLOCK),
        ("network", NETWORK_BUDGET_PER_BLOCK),
        ("compute", COMPUTE_BUDGET_PER_BLOCK),
    ]
    .into_iter()
    .map(|(resource, block_budget)| BudgetTable {
        resource,
        block_budget,
        points: sweep(block_budget),
    })
    .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    for table in &tables {
        println!("Budget is: {}", table.block_budget);
        for p in &table.points {
            println!(
                "At {:.4} utilization, resource_supply={:15}   rc_reserve={:10}   price={}",
                p.utilization, p.resource_supply, p.rc_reserve, p.price
            );
        }
    }

    Ok(())
}
