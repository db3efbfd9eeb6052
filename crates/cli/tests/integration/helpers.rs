//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Slot 0 of the USDC market on Arbitrum at block 255599800
pub const SLOT0: &str = "0x0000008ca041769c0000006fba88b3780003955035f9a274000391cdff2d82a1";

/// Slot 1 of the USDC market on Arbitrum at block 255599800
pub const SLOT1: &str = "0x000066edd86b000000000000001565bc751401000000000000001b59f181a092";

/// Create a CLI command with no logging or market environment leaking in.
pub fn comet_cmd() -> Command {
    let mut cmd = Command::cargo_bin("comet").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("ETH_RPC_URL")
        .env_remove("COMET_MARKET");
    cmd
}

/// Create a `compute` command for the observed slots.
pub fn compute_cmd() -> Command {
    let mut cmd = comet_cmd();
    cmd.args(["compute", "--slot0", SLOT0, "--slot1", SLOT1]);
    cmd
}
