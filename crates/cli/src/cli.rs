//! CLI argument definitions using clap.

use alloy_primitives::{Address, B256};
use clap::{Parser, Subcommand, ValueEnum};
use comet_rs_contracts::COMET_USDC_ARBITRUM;

/// Comet CLI - compute utilization and supply rate from raw storage
#[derive(Parser, Debug)]
#[command(name = "comet")]
#[command(about = "CLI tool for computing Comet utilization and supply rate", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute outputs from two storage words given on the command line
    Compute(ComputeArgs),
    /// Fetch slots 0 and 1 from a node and compute outputs
    Fetch(FetchArgs),
}

#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// Storage slot 0 as 32-byte hex (base indices)
    #[arg(long)]
    pub slot0: B256,

    /// Storage slot 1 as 32-byte hex (principal totals)
    #[arg(long)]
    pub slot1: B256,
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Comet market address (can also use COMET_MARKET env var)
    #[arg(long, env = "COMET_MARKET", default_value_t = COMET_USDC_ARBITRUM)]
    pub market: Address,

    /// Block to read at (default: latest)
    #[arg(long)]
    pub block: Option<u64>,

    /// RPC URL for the market's chain (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,

    /// Compare outputs with the contract's getUtilization/getSupplyRate views
    #[arg(long)]
    pub verify: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
