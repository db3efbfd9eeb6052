//! Public outputs of the circuit.
//!
//! The circuit exposes exactly two 32-byte big-endian words, utilization
//! first and supply rate second. Nothing else leaves the computation.

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

use crate::layout::WORD_BYTES;

/// The two output words committed by the circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicOutputs {
    /// Utilization, scaled by FACTOR_SCALE
    pub utilization: B256,
    /// Per-second supply rate, scaled by FACTOR_SCALE
    pub supply_rate: B256,
}

impl PublicOutputs {
    /// Output words in commitment order
    pub fn to_words(&self) -> [B256; 2] {
        [self.utilization, self.supply_rate]
    }

    /// The 64-byte output stream, utilization first
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 * WORD_BYTES);
        bytes.extend_from_slice(self.utilization.as_slice());
        bytes.extend_from_slice(self.supply_rate.as_slice());
        bytes
    }

    /// Utilization as an integer
    pub fn utilization_value(&self) -> U256 {
        U256::from_be_bytes(self.utilization.0)
    }

    /// Supply rate as an integer
    pub fn supply_rate_value(&self) -> U256 {
        U256::from_be_bytes(self.supply_rate.0)
    }
}

/// Pack utilization and supply rate into their output words
pub fn encode_outputs(utilization: U256, supply_rate: U256) -> PublicOutputs {
    PublicOutputs {
        utilization: B256::from(utilization.to_be_bytes::<WORD_BYTES>()),
        supply_rate: B256::from(supply_rate.to_be_bytes::<WORD_BYTES>()),
    }
}
