//! koinomics-sim: block-by-block integer simulation of the resource markets.
//!
//! Seeds the three markets at the 0.1%-utilization equilibrium, then drives
//! them with a constant mana spend split equally across markets, printing a
//! snapshot every report interval. Useful for watching prices settle after
//! a change to the genesis constants.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use koinomics_core::constants::{
    BLOCKS_PER_GENT, BLOCKS_PER_MONTH, COMPUTE_BUDGET_PER_BLOCK, DISK_BUDGET_PER_BLOCK,
    KOIN_SUPPLY, MAX_COMPUTE_PER_BLOCK, MAX_DISK_PER_BLOCK, MAX_NETWORK_PER_BLOCK,
    NETWORK_BUDGET_PER_BLOCK, RC_PER_MANA, SATS_PER_KOIN,
};
use koinomics_model::equilibrium::EquilibriumPoint;
use koinomics_model::market::{Market, MarketLimit};

/// Utilization the markets are seeded at.
const SEED_UTILIZATION: f64 = 0.001;

/// Basis-point denominator for the mana spend argument.
const BPS: u64 = 10_000;

/// CLI arguments for the market simulator.
#[derive(Debug, Parser)]
#[command(name = "koinomics-sim")]
#[command(about = "Integer simulation of the KOIN resource markets", long_about = None)]
struct Args {
    /// Months of 3-second blocks to simulate.
    #[arg(long, default_value_t = 12)]
    months: u64,

    /// Mana spent per block, as basis points of the per-block regeneration.
    #[arg(long, default_value_t = 500)]
    mana_spend_bp: u64,

    /// Blocks between snapshots.
    #[arg(long, default_value_t = 100_000)]
    report_interval: u64,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Chain-level mana accounting: the held supply regenerates one gent of
/// mana over [`BLOCKS_PER_GENT`] blocks, capped at the supply itself.
struct ManaLedger {
    koin_supply: u64,
    mana: u64,
}

impl ManaLedger {
    fn new(koin_supply: u64) -> Self {
        Self {
            koin_supply,
            mana: koin_supply,
        }
    }

    /// Mana available to spend this block at the configured rate.
    fn block_budget(&self, spend_bp: u64) -> u64 {
        let budget = self.koin_supply as u128 * spend_bp as u128
            / (BPS as u128 * BLOCKS_PER_GENT as u128);
        budget.min(self.mana as u128) as u64
    }

    fn spend(&mut self, amount: u64) {
        self.mana = self.mana.saturating_sub(amount);
    }

    fn regen(&mut self) {
        self.mana = (self.mana + self.koin_supply / BLOCKS_PER_GENT).min(self.koin_supply);
    }
}

/// Seed a market at the equilibrium for [`SEED_UTILIZATION`], with the RC
/// reserve scaled to satoshis.
fn seed_market(block_budget: u64, block_limit: u64) -> Market {
    let seed = EquilibriumPoint::at(block_budget, SEED_UTILIZATION);
    Market::new(
        seed.resource_supply,
        block_limit,
        seed.rc_reserve * SATS_PER_KOIN,
        block_budget,
    )
}

/// Resources purchasable with `mana` at the quoted cost, and the mana
/// actually charged for them (rounded up against the buyer).
fn consume(quote: &MarketLimit, mana: u64) -> (u64, u64) {
    // A freshly drained reserve can quote a zero cost; treat it as 1 so the
    // purchase arithmetic stays defined.
    let rc_cost = quote.rc_cost.max(1) as u128;
    let affordable = (mana as u128 * RC_PER_MANA as u128 / rc_cost).min(u64::MAX as u128) as u64;
    let used = quote.resource_limit.min(affordable);
    let mana_charged = ((used as u128 * rc_cost).div_ceil(RC_PER_MANA as u128)) as u64;
    (used, mana_charged)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the snapshots stay clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let supply_sats = KOIN_SUPPLY * SATS_PER_KOIN;
    let mut ledger = ManaLedger::new(supply_sats);

    let mut disk = seed_market(DISK_BUDGET_PER_BLOCK, MAX_DISK_PER_BLOCK);
    let mut network = seed_market(NETWORK_BUDGET_PER_BLOCK, MAX_NETWORK_PER_BLOCK);
    let mut compute = seed_market(COMPUTE_BUDGET_PER_BLOCK, MAX_COMPUTE_PER_BLOCK);

    let blocks = args.months * BLOCKS_PER_MONTH;
    info!(
        "simulating {} blocks ({} months) at {} bp mana spend",
        blocks, args.months, args.mana_spend_bp
    );

    for block in 0..blocks {
        let mana_budget = ledger.block_budget(args.mana_spend_bp);
        let per_market = mana_budget / 3;

        let disk_quote = disk.limit().context("disk market")?;
        let network_quote = network.limit().context("network market")?;
        let compute_quote = compute.limit().context("compute market")?;

        let (disk_used, disk_mana) = consume(&disk_quote, per_market);
        let (network_used, network_mana) = consume(&network_quote, per_market);
        let (compute_used, compute_mana) = consume(&compute_quote, per_market);

        if block % args.report_interval == 0 {
            println!("block {block}");
            println!(
                "price=[{}, {}, {}]",
                disk_quote.rc_cost, network_quote.rc_cost, compute_quote.rc_cost
            );
            println!("usage=[{disk_used}, {network_used}, {compute_used}]");
            println!("mana_spent=[{disk_mana}, {network_mana}, {compute_mana}]");
            println!(
                "rc=[{}, {}, {}]",
                disk.rc_reserve(),
                network.rc_reserve(),
                compute.rc_reserve()
            );
            println!(
                "res=[{}, {}, {}]",
                disk.resource_supply(),
                network.resource_supply(),
                compute.resource_supply()
            );
        }

        ledger.spend(disk_mana + network_mana + compute_mana);

        disk.update(supply_sats, disk_used).context("disk market")?;
        network.update(supply_sats, network_used).context("network market")?;
        compute.update(supply_sats, compute_used).context("compute market")?;

        ledger.regen();
    }

    Ok(())
}
