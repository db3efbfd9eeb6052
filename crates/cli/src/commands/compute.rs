//! Offline evaluation of two storage words.

use anyhow::Result;
use comet_rs_circuit::{CircuitInput, CometCircuit};
use tracing::info;

use super::print_report;
use crate::cli::{ComputeArgs, OutputFormat};
use crate::output::Report;

pub fn run_compute(args: &ComputeArgs, format: OutputFormat) -> Result<()> {
    let input = CircuitInput::from_words(args.slot0, args.slot1);
    let witness = CometCircuit::witness(&args.slot0, &args.slot1)?;
    info!(utilization = %witness.utilization, supply_rate = %witness.supply_rate, "computed outputs");

    print_report(&Report::new(&input, &witness), format)
}
