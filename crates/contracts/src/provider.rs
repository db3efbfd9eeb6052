//! Provider type definitions for storage clients.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{ContractError, Result};

/// The read-only provider used by storage clients.
///
/// Type-erased so the filler stack returned by `ProviderBuilder` does not leak into signatures.
pub type ReadProvider = DynProvider;

/// Build a read-only HTTP provider for `rpc_url`.
pub fn connect_http(rpc_url: &str) -> Result<ReadProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}
