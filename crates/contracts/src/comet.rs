//! Comet interface definitions.

use alloy::primitives::{address, Address};
use alloy::sol;

/// Compound III USDC market on Arbitrum (cUSDCv3), whose storage the slot layouts describe
pub const COMET_USDC_ARBITRUM: Address = address!("d98Be00b5D27fc98112BdE293e487f8D4cA57d07");

sol! {
    #[sol(rpc)]
    interface IComet {
        function getUtilization() external view returns (uint256);
        function getSupplyRate(uint256 utilization) external view returns (uint64);
    }
}
