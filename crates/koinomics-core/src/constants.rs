//! Protocol constants. All supply values in whole KOIN unless noted.

/// Total KOIN supply, in whole coins.
pub const KOIN_SUPPLY: u64 = 100_000_000;

/// Satoshis per KOIN. Market-level RC bookkeeping runs in satoshis.
pub const SATS_PER_KOIN: u64 = 100_000_000;

/// Resource credits produced by one mana.
pub const RC_PER_MANA: u64 = 10_000;

/// Target block interval.
pub const BLOCK_INTERVAL_MS: u64 = 3_000;

/// Milliseconds for a fully held coin to generate one gent of mana.
pub const MS_PER_GENT: u64 = 432_000_000;

/// Blocks for a fully held coin to generate one gent of mana.
///
/// # Examples
///
/// ```
/// use koinomics_core::constants::BLOCKS_PER_GENT;
/// assert_eq!(BLOCKS_PER_GENT, 144_000); // five days of 3-second blocks
/// ```
pub const BLOCKS_PER_GENT: u64 = MS_PER_GENT / BLOCK_INTERVAL_MS;

/// Fraction of a gent generated per block.
pub const GENT_PER_BLOCK: f64 = BLOCK_INTERVAL_MS as f64 / MS_PER_GENT as f64;

/// Blocks per 30-day month at the target interval.
pub const BLOCKS_PER_MONTH: u64 = 30 * 24 * 60 * 60 * 1_000 / BLOCK_INTERVAL_MS;

/// Per-block market decay rate, multiplier form.
///
/// Corresponds to a half-life of two months of 3-second blocks
/// (1,728,000 blocks); see `mulshift::MARKET_DECAY` for the integer pair
/// and its derivation test.
pub const DECAY_MUL: u64 = 0xd75a712f;
/// Per-block market decay rate, shift form.
pub const DECAY_SHIFT: u32 = 53;

/// Float image of the per-block decay rate.
///
/// Exact: a 32-bit pattern divided by a power of two is representable in
/// an f64 without rounding.
///
/// # Examples
///
/// ```
/// use koinomics_core::constants::DECAY_MULT;
/// assert!(DECAY_MULT > 4.0e-7 && DECAY_MULT < 4.1e-7);
/// ```
pub const DECAY_MULT: f64 = DECAY_MUL as f64 / (1u64 << DECAY_SHIFT) as f64;

/// Phantom RC generation rate against supply in whole KOIN, multiplier form.
///
/// Matches the mana generated by 0.1% of the supply, putting a floor under
/// the RC reserve so prices stay finite at zero utilization.
pub const PHANTOM_RC_MUL: u64 = 0xee9bfab5;
/// Phantom RC generation rate, shift form.
pub const PHANTOM_RC_SHIFT: u32 = 59;

/// Float image of the phantom RC rate.
pub const PHANTOM_RC_MULT: f64 = PHANTOM_RC_MUL as f64 / (1u64 << PHANTOM_RC_SHIFT) as f64;

/// Phantom RC rate against supply in satoshis, multiplier form.
///
/// The satoshi-form rate folds in `RC_PER_MANA`, so it is the whole-KOIN
/// rate scaled by 10,000.
pub const PHANTOM_RC_SAT_MUL: u64 = 0x91a2b3c5;
/// Phantom RC rate against supply in satoshis, shift form.
pub const PHANTOM_RC_SAT_SHIFT: u32 = 45;

pub const DISK_BUDGET_PER_BLOCK: u64 = 39_600; // 10G per month
pub const MAX_DISK_PER_BLOCK: u64 = 200 << 10; // 200k
pub const NETWORK_BUDGET_PER_BLOCK: u64 = 1 << 18; // 256k block
pub const MAX_NETWORK_PER_BLOCK: u64 = 1 << 20; // 1M block
pub const COMPUTE_BUDGET_PER_BLOCK: u64 = 57_500_000; // ~0.1s
pub const MAX_COMPUTE_PER_BLOCK: u64 = 287_500_000; // ~0.5s
