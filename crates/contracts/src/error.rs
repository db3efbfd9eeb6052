//! Error types for the contracts crate.

use comet_rs_circuit::CircuitError;
use thiserror::Error;

/// Errors that can occur when reading Comet state.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Reading a storage slot failed.
    #[error("Failed to read storage slot {slot}: {reason}")]
    StorageRead { slot: u64, reason: String },

    /// A view call failed.
    #[error("Call failed: {0}")]
    CallFailed(String),

    /// The fetched words could not be turned into circuit input.
    #[error(transparent)]
    Circuit(#[from] CircuitError),
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
