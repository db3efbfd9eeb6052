//! Kinked supply rate model.
//!
//! Comet prices supply with a two-segment linear curve over utilization:
//!
//! ```text
//! If utilization <= kink:
//!     rate = base + slope_low * utilization
//! If utilization > kink:
//!     rate = base + slope_low * kink + slope_high * (utilization - kink)
//! ```
//!
//! Every product is truncated by FACTOR_SCALE, exactly as the contract does.
//! Both segments are always evaluated and the result is picked with an
//! oblivious select on `utilization > kink`. When the low segment is picked,
//! `utilization - kink` in the discarded high segment is clamped at zero.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SUPPLY_KINK` | 0.85 | Utilization where the slope changes |
//! | `SUPPLY_PER_SECOND_INTEREST_RATE_BASE` | 0 | Rate at zero utilization |
//! | `SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_LOW` | ~3.9% APR | Slope below the kink |
//! | `SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_HIGH` | ~360% APR | Slope above the kink |
//!
//! # Example
//!
//! ```rust
//! use comet_rs_circuit::rate::SUPPLY_RATE_MODEL;
//! use alloy_primitives::U256;
//!
//! let rate = SUPPLY_RATE_MODEL
//!     .supply_rate(U256::from(785_320_331_907_519_211u64))
//!     .unwrap();
//! assert_eq!(rate, U256::from(971_191_429u64));
//! ```

use alloy_primitives::U256;
use tracing::debug;

use crate::error::Result;
use crate::math::{add, is_greater_than, select, w_mul_down, zero_floor_sub};

/// Utilization at which the supply slope changes (0.85 in FACTOR_SCALE)
pub const SUPPLY_KINK: U256 = U256::from_limbs([850_000_000_000_000_000, 0, 0, 0]);

/// Supply rate at zero utilization (per second)
pub const SUPPLY_PER_SECOND_INTEREST_RATE_BASE: U256 = U256::ZERO;

/// Supply slope below the kink (per second, FACTOR_SCALE)
pub const SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_LOW: U256 =
    U256::from_limbs([1_236_681_887, 0, 0, 0]);

/// Supply slope above the kink (per second, FACTOR_SCALE)
pub const SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_HIGH: U256 =
    U256::from_limbs([114_155_251_141, 0, 0, 0]);

/// The supply curve of the Comet market the slot layouts describe
pub const SUPPLY_RATE_MODEL: RateModel = RateModel::new(
    SUPPLY_KINK,
    SUPPLY_PER_SECOND_INTEREST_RATE_BASE,
    SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_LOW,
    SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_HIGH,
);

/// Coefficients of a kinked linear rate curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateModel {
    /// Utilization where the slope changes (FACTOR_SCALE)
    pub kink: U256,
    /// Rate at zero utilization
    pub rate_base: U256,
    /// Slope below and at the kink
    pub slope_low: U256,
    /// Slope above the kink
    pub slope_high: U256,
}

impl RateModel {
    /// Creates a rate model from its coefficients
    pub const fn new(kink: U256, rate_base: U256, slope_low: U256, slope_high: U256) -> Self {
        Self {
            kink,
            rate_base,
            slope_low,
            slope_high,
        }
    }

    /// Rate on the low segment: `base + slope_low * utilization`
    pub fn low_branch(&self, utilization: U256) -> Result<U256> {
        add(self.rate_base, w_mul_down(self.slope_low, utilization)?)
    }

    /// Rate on the high segment: `base + slope_low * kink + slope_high * (utilization - kink)`.
    ///
    /// The excess over the kink is clamped at zero, so this is defined for any utilization.
    pub fn high_branch(&self, utilization: U256) -> Result<U256> {
        let at_kink = add(self.rate_base, w_mul_down(self.slope_low, self.kink)?)?;
        let excess = zero_floor_sub(utilization, self.kink);
        add(at_kink, w_mul_down(self.slope_high, excess)?)
    }

    /// Per-second rate for the given utilization (FACTOR_SCALE)
    pub fn supply_rate(&self, utilization: U256) -> Result<U256> {
        let low = self.low_branch(utilization)?;
        let high = self.high_branch(utilization)?;
        let above_kink = is_greater_than(utilization, self.kink);
        let rate = select(above_kink, high, low)?;

        debug!(%utilization, %low, %high, above_kink = above_kink.is_set(), %rate, "computed supply rate");
        Ok(rate)
    }
}

/// Supply rate of [`SUPPLY_RATE_MODEL`] at the given utilization
pub fn get_supply_rate(utilization: U256) -> Result<U256> {
    SUPPLY_RATE_MODEL.supply_rate(utilization)
}
