//! Fixed-point multiply-shift arithmetic.
//!
//! Consensus code applies fractional per-block rates with integers only.
//! A rate `r` is represented by a pair `(mul, shift)` such that
//! `(x * mul) >> shift` approximates `x * r`, with the multiplier sized to
//! a requested bit width so the intermediate product stays within 128 bits
//! for any 64-bit input.

use std::fmt;

use serde::Serialize;

use crate::constants::{DECAY_MUL, DECAY_SHIFT, PHANTOM_RC_SAT_MUL, PHANTOM_RC_SAT_SHIFT};
use crate::error::FixedPointError;

/// Integer approximation of multiplication by a fractional rate.
///
/// As long as `mul / 2^shift` represents a rate below 1, [`apply`] cannot
/// exceed its input.
///
/// [`apply`]: MulShift::apply
///
/// # Examples
///
/// ```
/// use koinomics_core::MulShift;
///
/// let half = MulShift::from_rate(0.5, 32).unwrap();
/// assert_eq!(half.apply(1_000_000), 500_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MulShift {
    pub mul: u64,
    pub shift: u32,
}

/// Per-block decay applied to market resource supplies and RC reserves.
///
/// The bit pattern equals `from_half_life(1_728_000, 32)`, a half-life of
/// two months of 3-second blocks.
pub const MARKET_DECAY: MulShift = MulShift::new(DECAY_MUL, DECAY_SHIFT);

/// Phantom RC issued per block against the full KOIN supply in satoshis.
pub const PHANTOM_RC_ISSUANCE: MulShift = MulShift::new(PHANTOM_RC_SAT_MUL, PHANTOM_RC_SAT_SHIFT);

impl MulShift {
    pub const fn new(mul: u64, shift: u32) -> Self {
        Self { mul, shift }
    }

    /// Derive the pair approximating `rate` with a multiplier below `2^bits`.
    ///
    /// The shift is the largest value keeping `rate * 2^shift` under the
    /// bit-width ceiling, so the multiplier lands in `[2^(bits-1), 2^bits)`
    /// and the rate keeps `bits` significant bits. The multiplier is rounded
    /// to nearest.
    ///
    /// Rejects rates that are zero, negative, subnormal, or non-finite,
    /// rates at or above `2^bits` (no non-negative shift can represent
    /// them), and bit widths outside `1..=64`.
    pub fn from_rate(rate: f64, bits: u32) -> Result<Self, FixedPointError> {
        let shift = shift_for_rate(rate, bits)?;
        let mul = (0.5 + rate * (shift as f64).exp2()) as u64;
        Ok(Self { mul, shift })
    }

    /// Derive the pair for an exponential decay with the given half-life in
    /// blocks.
    ///
    /// The per-block rate solves `(1 - r)^half_life = 0.5`, giving
    /// `r = -expm1(-ln 2 / half_life)`. `exp_m1` keeps precision for large
    /// half-lives where `1 - exp(x)` would cancel.
    pub fn from_half_life(half_life: f64, bits: u32) -> Result<Self, FixedPointError> {
        if !half_life.is_finite() || half_life <= 0.0 {
            return Err(FixedPointError::HalfLifeNotPositive { half_life });
        }
        let rate = -(-std::f64::consts::LN_2 / half_life).exp_m1();
        Self::from_rate(rate, bits)
    }

    /// `(x * mul) >> shift`, truncated toward zero.
    pub const fn apply(&self, x: u64) -> u64 {
        if self.shift >= 128 {
            return 0;
        }
        ((x as u128 * self.mul as u128) >> self.shift) as u64
    }

    /// Float image `mul / 2^shift` of the represented rate.
    pub fn rate(&self) -> f64 {
        self.mul as f64 / (self.shift as f64).exp2()
    }
}

impl fmt::Display for MulShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:x}, {})", self.mul, self.shift)
    }
}

/// Largest shift keeping `rate * 2^shift` below the `2^bits` ceiling.
///
/// Doubles the scale until it crosses the ceiling, then backs off one step.
/// The doubling loop always terminates: the scale reaches infinity after at
/// most ~2100 iterations and the comparison fails there.
fn shift_for_rate(rate: f64, bits: u32) -> Result<u32, FixedPointError> {
    if !(1..=64).contains(&bits) {
        return Err(FixedPointError::BitsOutOfRange { bits });
    }
    // Subnormal rates are rejected too: the doubling scale below would
    // saturate at infinity before reaching them.
    if !rate.is_normal() || rate <= 0.0 {
        return Err(FixedPointError::RateNotPositive { rate });
    }
    let ceiling = (bits as f64).exp2();
    if rate >= ceiling {
        return Err(FixedPointError::RateTooWide { rate, bits });
    }

    let mut scale = 1.0_f64;
    let mut shift = 0u32;
    while rate * scale < ceiling {
        scale *= 2.0;
        shift += 1;
    }
    Ok(shift - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        BLOCKS_PER_MONTH, DECAY_MULT, GENT_PER_BLOCK, KOIN_SUPPLY, PHANTOM_RC_MULT, RC_PER_MANA,
        SATS_PER_KOIN,
    };
    use proptest::prelude::*;

    // --- shift selection ---

    #[test]
    fn shift_backs_off_one_doubling() {
        // 0.5 * 2^33 reaches the 32-bit ceiling exactly, so the selected
        // shift is 32 and the multiplier is 2^31.
        let ms = MulShift::from_rate(0.5, 32).unwrap();
        assert_eq!(ms, MulShift::new(0x8000_0000, 32));
    }

    #[test]
    fn rate_at_ceiling_rejected() {
        let err = MulShift::from_rate(4_294_967_296.0, 32).unwrap_err();
        assert!(matches!(err, FixedPointError::RateTooWide { bits: 32, .. }));
    }

    #[test]
    fn degenerate_rates_rejected() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = MulShift::from_rate(rate, 32).unwrap_err();
            assert!(matches!(err, FixedPointError::RateNotPositive { .. }), "rate {rate}");
        }
    }

    #[test]
    fn bit_width_bounds_enforced() {
        assert!(matches!(
            MulShift::from_rate(0.5, 0).unwrap_err(),
            FixedPointError::BitsOutOfRange { bits: 0 }
        ));
        assert!(matches!(
            MulShift::from_rate(0.5, 65).unwrap_err(),
            FixedPointError::BitsOutOfRange { bits: 65 }
        ));
        assert!(MulShift::from_rate(0.5, 64).is_ok());
    }

    #[test]
    fn degenerate_half_lives_rejected() {
        for hl in [0.0, -1000.0, f64::NAN, f64::INFINITY] {
            let err = MulShift::from_half_life(hl, 32).unwrap_err();
            assert!(
                matches!(err, FixedPointError::HalfLifeNotPositive { .. }),
                "half-life {hl}"
            );
        }
    }

    // --- reference pairs ---

    #[test]
    fn half_life_reference_pairs() {
        // 1000 blocks, then a month of 10-second and of 3-second blocks.
        let cases = [
            (1_000.0, MulShift::new(0xb5a4_33c8, 42)),
            (259_200.0, MulShift::new(0xb375_fb9f, 50)),
            (864_000.0, MulShift::new(0xd75a_6e5a, 52)),
        ];
        for (hl, expected) in cases {
            assert_eq!(MulShift::from_half_life(hl, 32).unwrap(), expected, "hl {hl}");
        }
    }

    #[test]
    fn decay_constant_is_two_month_half_life() {
        let ms = MulShift::from_half_life((2 * BLOCKS_PER_MONTH) as f64, 32).unwrap();
        assert_eq!(ms, MARKET_DECAY);
    }

    #[test]
    fn phantom_rate_reference_pairs() {
        // The phantom rate is the generation of 0.1% of the supply; the
        // satoshi form is the same rate scaled by RC_PER_MANA.
        let rate = 0.001 * GENT_PER_BLOCK;
        assert_eq!(
            MulShift::from_rate(rate, 32).unwrap(),
            MulShift::new(0xee9b_fab5, 59)
        );
        assert_eq!(
            MulShift::from_rate(rate * RC_PER_MANA as f64, 32).unwrap(),
            PHANTOM_RC_ISSUANCE
        );
        assert_eq!(PHANTOM_RC_ISSUANCE, MulShift::new(0x91a2_b3c5, 45));
    }

    #[test]
    fn float_images_round_trip() {
        assert_eq!(MARKET_DECAY.rate(), DECAY_MULT);
        assert_eq!(
            MulShift::from_rate(PHANTOM_RC_MULT, 32).unwrap(),
            MulShift::new(0xee9b_fab5, 59)
        );
    }

    // --- apply ---

    #[test]
    fn apply_truncates_toward_zero() {
        // 3 * (1/2) = 1.5, truncated to 1.
        assert_eq!(MulShift::new(1, 1).apply(3), 1);
    }

    #[test]
    fn apply_oversized_shift_is_zero() {
        assert_eq!(MulShift::new(u64::MAX, 128).apply(u64::MAX), 0);
    }

    #[test]
    fn phantom_issuance_per_block() {
        let supply_sats = KOIN_SUPPLY * SATS_PER_KOIN;
        assert_eq!(PHANTOM_RC_ISSUANCE.apply(supply_sats), 694_444_444_491);
    }

    #[test]
    fn market_decay_on_seed_reserve() {
        // RC reserve at the 0.1%-utilization equilibrium, in satoshis.
        let reserve = 34_624_687_927 * SATS_PER_KOIN;
        assert_eq!(MARKET_DECAY.apply(reserve), 1_388_888_888_905);
    }

    // --- Display ---

    #[test]
    fn display_is_hex_mul_and_decimal_shift() {
        let ms = MulShift::new(0xb5a4_33c8, 42);
        assert_eq!(ms.to_string(), "(b5a433c8, 42)");
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn multiplier_uses_full_width(rate in 1e-12f64..0.99f64) {
            let ms = MulShift::from_rate(rate, 32).unwrap();
            prop_assert!(ms.mul >= 1u64 << 31, "mul {:x}", ms.mul);
            prop_assert!(ms.mul < 1u64 << 32, "mul {:x}", ms.mul);
        }

        #[test]
        fn rate_round_trip_error_bounded(rate in 1e-12f64..0.99f64) {
            let ms = MulShift::from_rate(rate, 32).unwrap();
            let rel = ((ms.rate() - rate) / rate).abs();
            prop_assert!(rel < 2f64.powi(-31), "rel {rel}");
        }

        #[test]
        fn half_life_round_trip(hl in 2.0f64..10_000_000.0f64) {
            let ms = MulShift::from_half_life(hl, 32).unwrap();
            let halved = (1.0 - ms.rate()).powf(hl);
            prop_assert!((halved - 0.5).abs() < 0.01, "halved {halved}");
        }

        #[test]
        fn scaling_a_rate_shrinks_the_shift(rate in 1e-12f64..1e-6f64) {
            // A 10,000x rate needs log2(10000) ~ 13.3 fewer fractional bits.
            let small = MulShift::from_rate(rate, 32).unwrap();
            let large = MulShift::from_rate(10_000.0 * rate, 32).unwrap();
            let diff = small.shift - large.shift;
            prop_assert!(diff == 13 || diff == 14, "diff {diff}");
        }

        #[test]
        fn decay_never_exceeds_input(x in any::<u64>()) {
            prop_assert!(MARKET_DECAY.apply(x) <= x);
        }
    }
}
