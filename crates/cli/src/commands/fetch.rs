//! Evaluation of a live market's storage.

use alloy_primitives::U256;
use anyhow::{bail, Result};
use comet_rs_circuit::{encode_outputs, AppCircuit, CircuitError, CometCircuit};
use comet_rs_contracts::StorageClient;
use tracing::{info, warn};

use super::print_report;
use crate::cli::{FetchArgs, OutputFormat};
use crate::output::{Report, Verification};

pub async fn run_fetch(args: &FetchArgs, format: OutputFormat) -> Result<()> {
    let client = StorageClient::new(&args.rpc_url)?;
    let block = match args.block {
        Some(block) => block,
        None => client.block_number().await?,
    };

    let input = client.fetch_circuit_input(args.market, block).await?;
    let witness = CometCircuit::witness(&input.slot0().value, &input.slot1().value)?;
    info!(market = %args.market, block, utilization = %witness.utilization, "computed outputs");

    let mut report = Report::new(&input, &witness).with_source(args.market, block);

    if !args.verify {
        return print_report(&report, format);
    }

    // The contract's views at the same block stand in for claimed outputs
    let onchain_utilization = client.get_utilization(args.market, block).await?;
    let onchain_supply_rate = U256::from(
        client
            .get_supply_rate(args.market, onchain_utilization, block)
            .await?,
    );
    let claimed = encode_outputs(onchain_utilization, onchain_supply_rate);

    let checked = CometCircuit.check(&input, &claimed);
    report = report.with_verification(Verification {
        onchain_utilization,
        onchain_supply_rate,
        matches: checked.is_ok(),
    });
    print_report(&report, format)?;

    match checked {
        Ok(()) => Ok(()),
        Err(err @ CircuitError::ConstraintViolation { .. }) => {
            warn!(%err, "on-chain values differ");
            bail!("verification failed: {}", err)
        }
        Err(err) => Err(err.into()),
    }
}
