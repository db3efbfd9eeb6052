//! Storage readers and view bindings for Compound III (Comet) markets.
//!
//! This crate fetches the raw storage words the circuit consumes and reads
//! the market's own views, so circuit outputs can be compared with what the
//! contract reports at the same block.
//!
//! # Example
//!
//! ```no_run
//! use comet_rs_circuit::{AppCircuit, CometCircuit};
//! use comet_rs_contracts::{StorageClient, COMET_USDC_ARBITRUM};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StorageClient::new("https://arb1.arbitrum.io/rpc")?;
//!
//!     let input = client.fetch_circuit_input(COMET_USDC_ARBITRUM, 255_599_800).await?;
//!     let outputs = CometCircuit.define(&input)?;
//!
//!     let onchain = client.get_utilization(COMET_USDC_ARBITRUM, 255_599_800).await?;
//!     assert_eq!(outputs.utilization_value(), onchain);
//!     Ok(())
//! }
//! ```

pub mod comet;
pub mod error;
pub mod provider;
pub mod storage_client;

pub use comet::{IComet, COMET_USDC_ARBITRUM};
pub use error::{ContractError, Result};
pub use provider::{connect_http, ReadProvider};
pub use storage_client::StorageClient;
