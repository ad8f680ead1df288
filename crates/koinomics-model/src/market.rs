//! Integer model of one resource market.
//!
//! Pricing is constant-product over `resource_supply * rc_reserve`: a quote
//! prices the whole per-block limit as if it were bought against the curve,
//! then spreads that RC over the limit, rounding in the market's favor. The
//! per-block update applies consumption, multiply-shift decay, the budget
//! deposit, and phantom RC issuance, in consensus order.
//!
//! All arithmetic is integer-only with u128 intermediates. RC amounts are
//! in satoshis.

use serde::Serialize;
use tracing::trace;

use koinomics_core::error::MarketError;
use koinomics_core::mulshift::{MARKET_DECAY, PHANTOM_RC_ISSUANCE};

/// State of one resource market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Market {
    resource_supply: u64,
    block_limit: u64,
    rc_reserve: u64,
    block_budget: u64,
}

/// Per-block quote: how much may be consumed and the RC cost per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketLimit {
    pub resource_limit: u64,
    pub rc_cost: u64,
}

impl Market {
    pub const fn new(
        resource_supply: u64,
        block_limit: u64,
        rc_reserve: u64,
        block_budget: u64,
    ) -> Self {
        Self {
            resource_supply,
            block_limit,
            rc_reserve,
            block_budget,
        }
    }

    pub const fn resource_supply(&self) -> u64 {
        self.resource_supply
    }

    pub const fn rc_reserve(&self) -> u64 {
        self.rc_reserve
    }

    pub const fn block_limit(&self) -> u64 {
        self.block_limit
    }

    pub const fn block_budget(&self) -> u64 {
        self.block_budget
    }

    /// Quote the current block's consumption limit and per-unit RC cost.
    ///
    /// With `k = resource_supply * rc_reserve` held constant, consuming the
    /// whole limit would raise the reserve by some `consumed_rc`; the
    /// per-unit cost is that increase spread over the limit. Both divisions
    /// round up, so buyers can never pay less than the curve demands.
    ///
    /// A market with fewer than 2 resources or a zero block limit cannot
    /// quote.
    pub fn limit(&self) -> Result<MarketLimit, MarketError> {
        if self.resource_supply < 2 {
            return Err(MarketError::SupplyExhausted {
                supply: self.resource_supply,
            });
        }
        if self.block_limit == 0 {
            return Err(MarketError::ZeroBlockLimit);
        }

        let resource_limit = (self.resource_supply - 1).min(self.block_limit);
        let k = self.resource_supply as u128 * self.rc_reserve as u128;
        let new_supply = (self.resource_supply - resource_limit) as u128;
        let consumed_rc = (k + new_supply - 1) / new_supply - self.rc_reserve as u128;
        let rc_cost = (consumed_rc + resource_limit as u128 - 1) / resource_limit as u128;
        let rc_cost = u64::try_from(rc_cost).map_err(|_| MarketError::ArithmeticOverflow)?;

        Ok(MarketLimit {
            resource_limit,
            rc_cost,
        })
    }

    /// Advance the market by one block in which `resources_consumed` units
    /// were used, paid at the current quote.
    ///
    /// Order matters for consensus: the resource supply takes consumption,
    /// then decay, then the budget deposit; the RC reserve decays before
    /// consumption RC and phantom RC are credited. The reserve saturates at
    /// u64::MAX rather than overflowing.
    pub fn update(
        &mut self,
        koin_supply_sats: u64,
        resources_consumed: u64,
    ) -> Result<(), MarketError> {
        let MarketLimit { rc_cost, .. } = self.limit()?;
        let rc_consumed = resources_consumed as u128 * rc_cost as u128;

        let mut resource_supply = self
            .resource_supply
            .checked_sub(resources_consumed)
            .ok_or(MarketError::ConsumptionExceedsSupply {
                consumed: resources_consumed,
                supply: self.resource_supply,
            })?;
        let resources_decayed = MARKET_DECAY.apply(resource_supply);
        resource_supply -= resources_decayed;
        resource_supply = resource_supply
            .checked_add(self.block_budget)
            .ok_or(MarketError::ArithmeticOverflow)?;

        let rc_decayed = MARKET_DECAY.apply(self.rc_reserve);
        let phantom_rc = PHANTOM_RC_ISSUANCE.apply(koin_supply_sats);
        let credited = (self.rc_reserve - rc_decayed) as u128 + rc_consumed + phantom_rc as u128;

        trace!(
            "consumed={resources_consumed} decayed={resources_decayed} \
             rc_decayed={rc_decayed} phantom_rc={phantom_rc}"
        );

        self.resource_supply = resource_supply;
        self.rc_reserve = credited.min(u64::MAX as u128) as u64;
        Ok(())
    }
}
