//! Error types for the koinomics toolkit.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixedPointError {
    #[error("rate {rate} is not a positive finite number")] RateNotPositive { rate: f64 },
    #[error("rate {rate} does not fit in {bits} bits at any non-negative shift")] RateTooWide { rate: f64, bits: u32 },
    #[error("half-life {half_life} is not a positive finite number")] HalfLifeNotPositive { half_life: f64 },
    #[error("bit width {bits} outside 1..=64")] BitsOutOfRange { bits: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("resource supply {supply} too low to quote a price")] SupplyExhausted { supply: u64 },
    #[error("block limit is zero")] ZeroBlockLimit,
    #[error("consumed {consumed} exceeds resource supply {supply}")] ConsumptionExceedsSupply { consumed: u64, supply: u64 },
    #[error("arithmetic overflow")] ArithmeticOverflow,
}

#[derive(Error, Debug)]
pub enum KoinomicsError {
    #[error(transparent)] FixedPoint(#[from] FixedPointError),
    #[error(transparent)] Market(#[from] MarketError),
}
