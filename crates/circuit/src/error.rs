//! Error types for the circuit library.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors that can occur while building or evaluating the circuit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitError {
    /// A field descriptor does not fit inside a 32-byte word
    #[error("Field {name} at byte offset {offset} with width {width} exceeds the 32-byte word")]
    FieldOutOfBounds {
        name: &'static str,
        offset: usize,
        width: usize,
    },

    /// A field descriptor is wider than the working integer width
    #[error("Field {name} is {width} bytes wide, above the {max_bits}-bit working width")]
    FieldTooWide {
        name: &'static str,
        width: usize,
        max_bits: usize,
    },

    /// A field descriptor has zero width
    #[error("Field {name} has zero width")]
    EmptyField { name: &'static str },

    /// Two field descriptors claim the same bytes
    #[error("Fields {first} and {second} overlap")]
    OverlappingFields {
        first: &'static str,
        second: &'static str,
    },

    /// A value handed to the encoder does not fit its field
    #[error("Value {value} does not fit in field {name} ({width} bytes)")]
    FieldValueTooLarge {
        name: &'static str,
        value: U256,
        width: usize,
    },

    /// The number of values does not match the number of fields
    #[error("Expected {expected} field values, got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// An intermediate value left the working integer width
    #[error("Overflow in {op}: result exceeds {max_bits} bits")]
    Overflow { op: &'static str, max_bits: usize },

    /// Subtraction below zero
    #[error("Underflow in sub: {lhs} - {rhs}")]
    Underflow { lhs: U256, rhs: U256 },

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// More storage slots supplied than the circuit allocates
    #[error("Circuit allocates {max} storage slots, got {actual}")]
    TooManySlots { max: usize, actual: usize },

    /// A required storage slot is missing from the input
    #[error("Storage slot {slot} missing from circuit input")]
    MissingSlot { slot: u64 },

    /// A claimed public output disagrees with the recomputed one
    #[error("Constraint violation on {output}: expected {expected}, claimed {actual}")]
    ConstraintViolation {
        output: &'static str,
        expected: U256,
        actual: U256,
    },
}

/// Result type alias for circuit operations.
pub type Result<T> = std::result::Result<T, CircuitError>;
