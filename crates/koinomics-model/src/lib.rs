//! # koinomics-model — equilibrium and market models for the KOIN resource
//! markets.
//!
//! Two views of the same economy. [`equilibrium`] solves the steady state in
//! closed form with floating point, for deriving genesis constants and
//! pricing tables offline. [`market`] is the integer constant-product market
//! the chain actually runs block by block, using only multiply-shift
//! arithmetic from `koinomics-core`.

pub mod equilibrium;
pub mod market;

pub use equilibrium::{EquilibriumPoint, eq_rc_reserve, eq_resource_supply, sweep};
pub use market::{Market, MarketLimit};
