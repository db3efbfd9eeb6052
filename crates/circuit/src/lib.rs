//! Comet Utilization Circuit
//!
//! This crate computes the utilization and per-second supply rate of a
//! Compound III (Comet) market from two raw storage words, with the same
//! integer truncation as the contract and without data-dependent branches,
//! so the computation can be carried into a zero-knowledge proof unchanged.
//!
//! # Overview
//!
//! - [`layout`] decodes packed fields from slot 0 and slot 1
//! - [`math`] provides 248-bit checked fixed-point arithmetic and oblivious select
//! - [`utilization`] turns principal and indices into a utilization ratio
//! - [`rate`] evaluates the kinked supply rate curve
//! - [`output`] packs the results into two public output words
//! - [`circuit`] ties the stages together and checks claimed outputs
//!
//! # Example
//!
//! ```rust
//! use comet_rs_circuit::CometCircuit;
//! use alloy_primitives::{b256, U256};
//!
//! let slot0 = b256!("0000008ca041769c0000006fba88b3780003955035f9a274000391cdff2d82a1");
//! let slot1 = b256!("000066edd86b000000000000001565bc751401000000000000001b59f181a092");
//!
//! let outputs = CometCircuit::compute(&slot0, &slot1)?;
//! assert_eq!(outputs.utilization_value(), U256::from(785_320_331_907_519_211u64));
//! assert_eq!(outputs.supply_rate_value(), U256::from(971_191_429u64));
//! # Ok::<(), comet_rs_circuit::CircuitError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod layout;
pub mod math;
pub mod output;
pub mod rate;
pub mod utilization;

// Re-export commonly used types
pub use error::{CircuitError, Result};

// Circuit exports
pub use circuit::{
    AppCircuit, Allocation, CircuitInput, CometCircuit, StorageSlot, Witness, SLOT0_INDEX,
    SLOT1_INDEX,
};

// Layout exports
pub use layout::{DecodedSlot, FieldSpec, SlotLayout, SLOT0_FIELDS, SLOT1_FIELDS, WORD_BYTES};

// Math exports
pub use math::{Bit, BASE_INDEX_SCALE, FACTOR_SCALE, MAX_BITS, SECONDS_PER_YEAR};

// Output exports
pub use output::{encode_outputs, PublicOutputs};

// Rate exports
pub use rate::{
    get_supply_rate, RateModel, SUPPLY_KINK, SUPPLY_PER_SECOND_INTEREST_RATE_BASE,
    SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_HIGH, SUPPLY_PER_SECOND_INTEREST_RATE_SLOPE_LOW,
    SUPPLY_RATE_MODEL,
};

// Utilization exports
pub use utilization::{get_utilization, MarketTotals};
