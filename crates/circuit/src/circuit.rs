//! The Comet utilization circuit.
//!
//! [`CometCircuit`] wires the stages together:
//!
//! ```text
//! slot0, slot1 -> SlotLayout::decode -> MarketTotals -> get_utilization
//!              -> RateModel::supply_rate -> encode_outputs -> PublicOutputs
//! ```
//!
//! The amount of work is the same for every input: the layouts are fixed,
//! both rate segments are always evaluated and the zero-supply guard never
//! skips its division.
//!
//! # Example
//!
//! ```rust
//! use comet_rs_circuit::{AppCircuit, CircuitInput, CometCircuit};
//! use alloy_primitives::{b256, U256};
//!
//! let input = CircuitInput::from_words(
//!     b256!("0000008ca041769c0000006fba88b3780003955035f9a274000391cdff2d82a1"),
//!     b256!("000066edd86b000000000000001565bc751401000000000000001b59f181a092"),
//! );
//! let outputs = CometCircuit.define(&input).unwrap();
//!
//! assert_eq!(outputs.utilization_value(), U256::from(785_320_331_907_519_211u64));
//! assert_eq!(outputs.supply_rate_value(), U256::from(971_191_429u64));
//! ```

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CircuitError, Result};
use crate::output::{encode_outputs, PublicOutputs};
use crate::rate::SUPPLY_RATE_MODEL;
use crate::utilization::{get_utilization, MarketTotals};

/// Storage slot index holding the base indices
pub const SLOT0_INDEX: u64 = 0;

/// Storage slot index holding the principal totals
pub const SLOT1_INDEX: u64 = 1;

/// A storage word read from a contract at a given block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSlot {
    /// Block the word was read at
    pub block_number: u64,
    /// Contract the word belongs to
    pub address: Address,
    /// Storage slot index
    pub slot: u64,
    /// Raw 32-byte value
    pub value: B256,
}

/// How many data items of each kind a circuit consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// Transaction receipts
    pub max_receipts: usize,
    /// Storage slots
    pub max_slots: usize,
    /// Transactions
    pub max_transactions: usize,
}

/// The two storage words the circuit reads, ordered by slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitInput {
    slot0: StorageSlot,
    slot1: StorageSlot,
}

impl CircuitInput {
    /// Build an input from fetched storage slots.
    ///
    /// Slots may arrive in any order. The binding of address and block is the
    /// fetcher's responsibility and is not checked here.
    pub fn new(slots: &[StorageSlot]) -> Result<Self> {
        let max = CometCircuit.allocate().max_slots;
        if slots.len() > max {
            return Err(CircuitError::TooManySlots {
                max,
                actual: slots.len(),
            });
        }

        let find = |index: u64| {
            slots
                .iter()
                .find(|slot| slot.slot == index)
                .copied()
                .ok_or(CircuitError::MissingSlot { slot: index })
        };

        Ok(Self {
            slot0: find(SLOT0_INDEX)?,
            slot1: find(SLOT1_INDEX)?,
        })
    }

    /// Build an input from bare words, with no address or block attached
    pub fn from_words(slot0: B256, slot1: B256) -> Self {
        let unbound = |slot, value| StorageSlot {
            block_number: 0,
            address: Address::ZERO,
            slot,
            value,
        };
        Self {
            slot0: unbound(SLOT0_INDEX, slot0),
            slot1: unbound(SLOT1_INDEX, slot1),
        }
    }

    /// Slot 0 (base indices)
    pub fn slot0(&self) -> &StorageSlot {
        &self.slot0
    }

    /// Slot 1 (principal totals)
    pub fn slot1(&self) -> &StorageSlot {
        &self.slot1
    }
}

/// Every value the circuit computes on the way to its outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Witness {
    /// Decoded storage fields
    pub totals: MarketTotals,
    /// Present value of supplied principal
    pub total_supply: U256,
    /// Present value of borrowed principal
    pub total_borrow: U256,
    /// Utilization (FACTOR_SCALE)
    pub utilization: U256,
    /// Per-second supply rate (FACTOR_SCALE)
    pub supply_rate: U256,
}

impl Witness {
    /// The public part of the witness
    pub fn outputs(&self) -> PublicOutputs {
        encode_outputs(self.utilization, self.supply_rate)
    }
}

/// A circuit that turns storage data into public outputs
pub trait AppCircuit {
    /// Data the circuit consumes
    fn allocate(&self) -> Allocation;

    /// Evaluate the circuit and return its public outputs
    fn define(&self, input: &CircuitInput) -> Result<PublicOutputs>;

    /// Check claimed outputs against a fresh evaluation.
    ///
    /// A mismatch is a [`CircuitError::ConstraintViolation`] naming the first
    /// output that differs.
    fn check(&self, input: &CircuitInput, claimed: &PublicOutputs) -> Result<()> {
        let recomputed = self.define(input)?;

        let pairs = [
            (
                "utilization",
                recomputed.utilization_value(),
                claimed.utilization_value(),
            ),
            (
                "supplyRate",
                recomputed.supply_rate_value(),
                claimed.supply_rate_value(),
            ),
        ];
        for (output, expected, actual) in pairs {
            if expected != actual {
                return Err(CircuitError::ConstraintViolation {
                    output,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Utilization and supply rate of a Comet market from slots 0 and 1
#[derive(Debug, Clone, Copy, Default)]
pub struct CometCircuit;

impl CometCircuit {
    /// Evaluate every intermediate value from the two raw words
    pub fn witness(slot0: &B256, slot1: &B256) -> Result<Witness> {
        let totals = MarketTotals::from_slots(slot0, slot1)?;
        let total_supply = totals.total_supply()?;
        let total_borrow = totals.total_borrow()?;
        let utilization = get_utilization(total_supply, total_borrow)?;
        let supply_rate = SUPPLY_RATE_MODEL.supply_rate(utilization)?;

        Ok(Witness {
            totals,
            total_supply,
            total_borrow,
            utilization,
            supply_rate,
        })
    }

    /// Public outputs for two raw words
    pub fn compute(slot0: &B256, slot1: &B256) -> Result<PublicOutputs> {
        Ok(Self::witness(slot0, slot1)?.outputs())
    }
}

impl AppCircuit for CometCircuit {
    fn allocate(&self) -> Allocation {
        Allocation {
            max_receipts: 0,
            max_slots: 2,
            max_transactions: 0,
        }
    }

    fn define(&self, input: &CircuitInput) -> Result<PublicOutputs> {
        let outputs = Self::compute(&input.slot0.value, &input.slot1.value)?;
        debug!(
            block = input.slot0.block_number,
            address = %input.slot0.address,
            utilization = %outputs.utilization_value(),
            supply_rate = %outputs.supply_rate_value(),
            "circuit outputs"
        );
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    const MARKET: Address = address!("d98Be00b5D27fc98112BdE293e487f8D4cA57d07");
    const BLOCK: u64 = 255_599_800;
    const SLOT0: B256 = b256!("0000008ca041769c0000006fba88b3780003955035f9a274000391cdff2d82a1");
    const SLOT1: B256 = b256!("000066edd86b000000000000001565bc751401000000000000001b59f181a092");

    fn storage(slot: u64, value: B256) -> StorageSlot {
        StorageSlot {
            block_number: BLOCK,
            address: MARKET,
            slot,
            value,
        }
    }

    #[test]
    fn test_allocation() {
        let allocation = CometCircuit.allocate();
        assert_eq!(allocation.max_slots, 2);
        assert_eq!(allocation.max_receipts, 0);
        assert_eq!(allocation.max_transactions, 0);
    }

    #[test]
    fn test_witness() {
        let witness = CometCircuit::witness(&SLOT0, &SLOT1).unwrap();
        assert_eq!(witness.total_supply, U256::from(30_215_630_308_072u64));
        assert_eq!(witness.total_borrow, U256::from(23_728_948_822_330u64));
        assert_eq!(witness.utilization, U256::from(785_320_331_907_519_211u64));
        assert_eq!(witness.supply_rate, U256::from(971_191_429u64));
    }

    #[test]
    fn test_input_slot_order() {
        let input = CircuitInput::new(&[storage(1, SLOT1), storage(0, SLOT0)]).unwrap();
        assert_eq!(input.slot0().value, SLOT0);
        assert_eq!(input.slot1().value, SLOT1);
        assert_eq!(input.slot0().block_number, BLOCK);
    }

    #[test]
    fn test_input_missing_slot() {
        let result = CircuitInput::new(&[storage(0, SLOT0)]);
        assert_eq!(result, Err(CircuitError::MissingSlot { slot: 1 }));
    }

    #[test]
    fn test_input_too_many_slots() {
        let result = CircuitInput::new(&[storage(0, SLOT0), storage(1, SLOT1), storage(2, SLOT1)]);
        assert_eq!(result, Err(CircuitError::TooManySlots { max: 2, actual: 3 }));
    }

    #[test]
    fn test_define_matches_compute() {
        let input = CircuitInput::new(&[storage(0, SLOT0), storage(1, SLOT1)]).unwrap();
        let outputs = CometCircuit.define(&input).unwrap();
        assert_eq!(outputs, CometCircuit::compute(&SLOT0, &SLOT1).unwrap());
    }

    #[test]
    fn test_check_accepts_honest_outputs() {
        let input = CircuitInput::from_words(SLOT0, SLOT1);
        let outputs = CometCircuit.define(&input).unwrap();
        assert_eq!(CometCircuit.check(&input, &outputs), Ok(()));
    }

    #[test]
    fn test_check_rejects_wrong_supply_rate() {
        let input = CircuitInput::from_words(SLOT0, SLOT1);
        let claimed = encode_outputs(
            U256::from(785_320_331_907_519_211u64),
            U256::from(971_191_430u64),
        );
        assert_eq!(
            CometCircuit.check(&input, &claimed),
            Err(CircuitError::ConstraintViolation {
                output: "supplyRate",
                expected: U256::from(971_191_429u64),
                actual: U256::from(971_191_430u64),
            })
        );
    }

    #[test]
    fn test_check_reports_utilization_first() {
        let input = CircuitInput::from_words(SLOT0, SLOT1);
        let claimed = encode_outputs(U256::ZERO, U256::ZERO);
        assert!(matches!(
            CometCircuit.check(&input, &claimed),
            Err(CircuitError::ConstraintViolation {
                output: "utilization",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_market() {
        let outputs = CometCircuit::compute(&B256::ZERO, &B256::ZERO).unwrap();
        assert_eq!(outputs.utilization_value(), U256::ZERO);
        assert_eq!(outputs.supply_rate_value(), U256::ZERO);
    }

    #[test]
    fn test_storage_slot_json() {
        let json = serde_json::to_value(storage(1, SLOT1)).unwrap();
        assert_eq!(json["blockNumber"], BLOCK);
        assert_eq!(json["slot"], 1);
    }
}
