//! Utilization of a Comet market from its packed storage.
//!
//! Comet stores principal balances in base units and two indices that grow
//! every second. Present values are `principal * index / BASE_INDEX_SCALE`,
//! and utilization is `totalBorrow * FACTOR_SCALE / totalSupply`, defined as
//! zero for an empty market.

use alloy_primitives::{B256, U256};
use tracing::debug;

use crate::error::Result;
use crate::layout::SlotLayout;
use crate::math::{is_zero, mul_div_down, select, BASE_INDEX_SCALE, FACTOR_SCALE, ONE};

/// The four storage fields utilization depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketTotals {
    /// Supply index, scaled by BASE_INDEX_SCALE (slot 0)
    pub base_supply_index: U256,
    /// Borrow index, scaled by BASE_INDEX_SCALE (slot 0)
    pub base_borrow_index: U256,
    /// Total supplied principal, in base units (slot 1)
    pub total_supply_base: U256,
    /// Total borrowed principal, in base units (slot 1)
    pub total_borrow_base: U256,
}

impl MarketTotals {
    /// Decode the totals from raw slot 0 and slot 1 words
    pub fn from_slots(slot0: &B256, slot1: &B256) -> Result<Self> {
        let [base_supply_index, base_borrow_index] =
            SlotLayout::slot0()?.decode(slot0).into_array()?;
        let [total_supply_base, total_borrow_base] =
            SlotLayout::slot1()?.decode(slot1).into_array()?;

        let totals = Self {
            base_supply_index,
            base_borrow_index,
            total_supply_base,
            total_borrow_base,
        };
        debug!(?totals, "decoded market totals");
        Ok(totals)
    }

    /// Present value of all supplied principal
    pub fn total_supply(&self) -> Result<U256> {
        mul_div_down(self.total_supply_base, self.base_supply_index, BASE_INDEX_SCALE)
    }

    /// Present value of all borrowed principal
    pub fn total_borrow(&self) -> Result<U256> {
        mul_div_down(self.total_borrow_base, self.base_borrow_index, BASE_INDEX_SCALE)
    }

    /// Market utilization, scaled by FACTOR_SCALE. See [`get_utilization`].
    pub fn utilization(&self) -> Result<U256> {
        get_utilization(self.total_supply()?, self.total_borrow()?)
    }
}

/// Calculate utilization from present-value totals.
///
/// Returns `floor(total_borrow * FACTOR_SCALE / total_supply)`, or zero when
/// `total_supply` is zero. The division is always carried out, against a
/// divisor of one in the empty case, and the result is then masked out.
///
/// Utilization is not capped at 1.0: a market that owes more than it holds
/// reports a ratio above FACTOR_SCALE.
pub fn get_utilization(total_supply: U256, total_borrow: U256) -> Result<U256> {
    let supply_is_zero = is_zero(total_supply);
    let divisor = select(supply_is_zero, ONE, total_supply)?;
    let ratio = mul_div_down(total_borrow, FACTOR_SCALE, divisor)?;
    let utilization = select(supply_is_zero, U256::ZERO, ratio)?;

    debug!(%total_supply, %total_borrow, %utilization, "computed utilization");
    Ok(utilization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CircuitError;
    use alloy_primitives::b256;

    const SLOT0: B256 = b256!("0000008ca041769c0000006fba88b3780003955035f9a274000391cdff2d82a1");
    const SLOT1: B256 = b256!("000066edd86b000000000000001565bc751401000000000000001b59f181a092");

    fn totals(supply_base: u64, borrow_base: u64) -> MarketTotals {
        MarketTotals {
            base_supply_index: BASE_INDEX_SCALE,
            base_borrow_index: BASE_INDEX_SCALE,
            total_supply_base: U256::from(supply_base),
            total_borrow_base: U256::from(borrow_base),
        }
    }

    #[test]
    fn test_from_slots() {
        let totals = MarketTotals::from_slots(&SLOT0, &SLOT1).unwrap();
        assert_eq!(totals.base_supply_index, U256::from(1_004_738_865_627_809u64));
        assert_eq!(totals.base_borrow_index, U256::from(1_008_596_665_606_772u64));
        assert_eq!(totals.total_supply_base, U256::from(30_073_117_843_602u64));
        assert_eq!(totals.total_borrow_base, U256::from(23_526_697_669_633u64));
    }

    #[test]
    fn test_present_values() {
        let totals = MarketTotals::from_slots(&SLOT0, &SLOT1).unwrap();
        // 30073117843602 * 1004738865627809 / 1e15
        assert_eq!(totals.total_supply().unwrap(), U256::from(30_215_630_308_072u64));
        // 23526697669633 * 1008596665606772 / 1e15
        assert_eq!(totals.total_borrow().unwrap(), U256::from(23_728_948_822_330u64));
    }

    #[test]
    fn test_utilization_from_slots() {
        let totals = MarketTotals::from_slots(&SLOT0, &SLOT1).unwrap();
        assert_eq!(
            totals.utilization().unwrap(),
            U256::from(785_320_331_907_519_211u64)
        );
    }

    #[test]
    fn test_utilization_half() {
        let utilization = totals(1_000, 500).utilization().unwrap();
        assert_eq!(utilization, FACTOR_SCALE / U256::from(2));
    }

    #[test]
    fn test_utilization_truncates() {
        // 1 / 3 = 0.333... -> 333333333333333333
        let utilization = get_utilization(U256::from(3), U256::from(1)).unwrap();
        assert_eq!(utilization, U256::from(333_333_333_333_333_333u64));
    }

    #[test]
    fn test_utilization_zero_supply() {
        assert_eq!(get_utilization(U256::ZERO, U256::ZERO).unwrap(), U256::ZERO);
        assert_eq!(
            get_utilization(U256::ZERO, U256::from(1_000_000)).unwrap(),
            U256::ZERO
        );
    }

    #[test]
    fn test_utilization_zero_supply_from_totals() {
        // Supply principal present but rounds to zero once the index is applied
        let totals = MarketTotals {
            base_supply_index: U256::from(1u64),
            base_borrow_index: BASE_INDEX_SCALE,
            total_supply_base: U256::from(999u64),
            total_borrow_base: U256::from(10u64),
        };
        assert_eq!(totals.total_supply().unwrap(), U256::ZERO);
        assert_eq!(totals.utilization().unwrap(), U256::ZERO);
    }

    #[test]
    fn test_utilization_above_one() {
        let utilization = totals(100, 150).utilization().unwrap();
        assert_eq!(utilization, U256::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn test_utilization_overflow() {
        let huge = U256::from(1u8) << 240;
        let result = get_utilization(U256::from(1u8), huge);
        assert!(matches!(result, Err(CircuitError::Overflow { .. })));
    }
}
