//! Serializable result of one circuit evaluation.

use alloy_primitives::{Address, B256, U256};
use comet_rs_circuit::{CircuitInput, PublicOutputs, Witness};
use serde::{Serialize, Serializer};

/// Everything the CLI reports about one evaluation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Market the slots were read from (absent for offline input)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Address>,
    /// Block the slots were read at (absent for offline input)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<u64>,
    pub slot0: B256,
    pub slot1: B256,
    #[serde(serialize_with = "decimal")]
    pub base_supply_index: U256,
    #[serde(serialize_with = "decimal")]
    pub base_borrow_index: U256,
    #[serde(serialize_with = "decimal")]
    pub total_supply_base: U256,
    #[serde(serialize_with = "decimal")]
    pub total_borrow_base: U256,
    #[serde(serialize_with = "decimal")]
    pub total_supply: U256,
    #[serde(serialize_with = "decimal")]
    pub total_borrow: U256,
    #[serde(serialize_with = "decimal")]
    pub utilization: U256,
    #[serde(serialize_with = "decimal")]
    pub supply_rate: U256,
    /// The two public output words
    pub outputs: PublicOutputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

/// Contract-reported values at the same block
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    #[serde(serialize_with = "decimal")]
    pub onchain_utilization: U256,
    #[serde(serialize_with = "decimal")]
    pub onchain_supply_rate: U256,
    pub matches: bool,
}

impl Report {
    /// Report for an offline evaluation
    pub fn new(input: &CircuitInput, witness: &Witness) -> Self {
        Self {
            market: None,
            block: None,
            slot0: input.slot0().value,
            slot1: input.slot1().value,
            base_supply_index: witness.totals.base_supply_index,
            base_borrow_index: witness.totals.base_borrow_index,
            total_supply_base: witness.totals.total_supply_base,
            total_borrow_base: witness.totals.total_borrow_base,
            total_supply: witness.total_supply,
            total_borrow: witness.total_borrow,
            utilization: witness.utilization,
            supply_rate: witness.supply_rate,
            outputs: witness.outputs(),
            verification: None,
        }
    }

    /// Attach the market and block the input was read from
    pub fn with_source(mut self, market: Address, block: u64) -> Self {
        self.market = Some(market);
        self.block = Some(block);
        self
    }

    /// Attach a comparison against contract-reported values
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = Some(verification);
        self
    }
}

fn decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
