//! # koinomics-core — constants and fixed-point primitives for the KOIN
//! resource-credit economy.
//!
//! The chain meters disk, network, and compute through three resource
//! markets priced in resource credits (RC). Held KOIN generates mana, and
//! mana converts into RC at a fixed ratio. This crate carries the protocol
//! constants shared by the offline calculators and the integer
//! multiply-shift primitive used wherever a fractional per-block rate must
//! be applied without floating point.

pub mod constants;
pub mod error;
pub mod mulshift;

pub use error::{FixedPointError, KoinomicsError, MarketError};
pub use mulshift::{MARKET_DECAY, MulShift, PHANTOM_RC_ISSUANCE};
