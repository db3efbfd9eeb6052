//! Storage client for reading Comet market state at a fixed block.

use alloy::{
    primitives::{Address, B256, U256},
    providers::Provider,
    rpc::types::BlockId,
};
use comet_rs_circuit::{CircuitInput, StorageSlot, SLOT0_INDEX, SLOT1_INDEX, WORD_BYTES};
use tracing::{debug, info};

use crate::comet::IComet;
use crate::error::{ContractError, Result};
use crate::provider::{connect_http, ReadProvider};

/// Client for reading raw storage and view functions of Comet markets.
pub struct StorageClient {
    provider: ReadProvider,
}

impl StorageClient {
    /// Create a new storage client.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self {
            provider: connect_http(rpc_url)?,
        })
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &ReadProvider {
        &self.provider
    }

    /// Get the latest block number.
    pub async fn block_number(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ContractError::RpcConnection(format!("Failed to get block number: {}", e)))
    }

    /// Read one raw storage word of `market` at `block`.
    pub async fn get_storage_at(&self, market: Address, slot: u64, block: u64) -> Result<B256> {
        let value = self
            .provider
            .get_storage_at(market, U256::from(slot))
            .block_id(BlockId::number(block))
            .await
            .map_err(|e| ContractError::StorageRead {
                slot,
                reason: e.to_string(),
            })?;

        let word = B256::from(value.to_be_bytes::<WORD_BYTES>());
        debug!(%market, slot, block, %word, "read storage slot");
        Ok(word)
    }

    /// Read one storage slot, keeping its address and block binding.
    pub async fn fetch_storage_slot(
        &self,
        market: Address,
        slot: u64,
        block: u64,
    ) -> Result<StorageSlot> {
        let value = self.get_storage_at(market, slot, block).await?;
        Ok(StorageSlot {
            block_number: block,
            address: market,
            slot,
            value,
        })
    }

    /// Read slots 0 and 1 of `market` at the same block.
    pub async fn fetch_circuit_input(&self, market: Address, block: u64) -> Result<CircuitInput> {
        let slot0 = self.fetch_storage_slot(market, SLOT0_INDEX, block).await?;
        let slot1 = self.fetch_storage_slot(market, SLOT1_INDEX, block).await?;
        info!(%market, block, "fetched circuit input");

        Ok(CircuitInput::new(&[slot0, slot1])?)
    }

    /// Utilization as reported by the market contract at `block`.
    pub async fn get_utilization(&self, market: Address, block: u64) -> Result<U256> {
        let contract = IComet::new(market, &self.provider);
        contract
            .getUtilization()
            .block(BlockId::number(block))
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("Failed to get utilization: {}", e)))
    }

    /// Supply rate as reported by the market contract for `utilization` at `block`.
    pub async fn get_supply_rate(
        &self,
        market: Address,
        utilization: U256,
        block: u64,
    ) -> Result<u64> {
        let contract = IComet::new(market, &self.provider);
        contract
            .getSupplyRate(utilization)
            .block(BlockId::number(block))
            .call()
            .await
            .map_err(|e| ContractError::CallFailed(format!("Failed to get supply rate: {}", e)))
    }
}
