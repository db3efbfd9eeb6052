//! Detailed output formatting for a single evaluation.

use alloy_primitives::U256;
use colored::Colorize;
use comet_rs_circuit::SECONDS_PER_YEAR;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::report::Report;

/// Decimal places of FACTOR_SCALE values
const FACTOR_DECIMALS: u32 = 18;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(field: &str, value: impl ToString) -> FieldRow {
    FieldRow {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Interpret a FACTOR_SCALE-scaled integer as a decimal, if it fits
fn scaled_to_decimal(value: U256) -> Option<Decimal> {
    let raw = i128::try_from(value).ok()?;
    Decimal::try_from_i128_with_scale(raw, FACTOR_DECIMALS).ok()
}

fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{}%", (v * Decimal::ONE_HUNDRED).round_dp(4).normalize()),
        None => "-".to_string(),
    }
}

/// Utilization as a percentage
pub fn format_utilization(utilization: U256) -> String {
    format_percent(scaled_to_decimal(utilization))
}

/// Per-second rate annualized without compounding
pub fn format_apr(rate_per_second: U256) -> String {
    let yearly = rate_per_second.checked_mul(SECONDS_PER_YEAR);
    format_percent(yearly.and_then(scaled_to_decimal))
}

fn format_table(rows: Vec<FieldRow>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

pub fn format_report_detail(report: &Report) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", "Comet Utilization Circuit".bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    // Source
    output.push_str(&format!("{}\n", "Source".cyan().bold()));
    match (report.market, report.block) {
        (Some(market), Some(block)) => {
            output.push_str(&format!("  Market: {}\n", market));
            output.push_str(&format!("  Block:  {}\n", block));
        }
        _ => output.push_str("  Offline input\n"),
    }
    output.push_str(&format!("  Slot 0: {}\n", report.slot0));
    output.push_str(&format!("  Slot 1: {}\n\n", report.slot1));

    // Decoded storage
    output.push_str(&format!("{}\n", "Decoded Storage".cyan().bold()));
    output.push_str(&format_table(vec![
        row("baseSupplyIndex", report.base_supply_index),
        row("baseBorrowIndex", report.base_borrow_index),
        row("totalSupplyBase", report.total_supply_base),
        row("totalBorrowBase", report.total_borrow_base),
        row("totalSupply", report.total_supply),
        row("totalBorrow", report.total_borrow),
    ]));
    output.push_str("\n\n");

    // Outputs
    output.push_str(&format!("{}\n", "Public Outputs".cyan().bold()));
    output.push_str(&format!(
        "  Utilization: {} ({})\n",
        report.utilization,
        format_utilization(report.utilization)
    ));
    output.push_str(&format!(
        "  Supply Rate: {} ({} APR)\n",
        report.supply_rate,
        format_apr(report.supply_rate)
    ));
    output.push_str(&format!("  Word 0:      {}\n", report.outputs.utilization));
    output.push_str(&format!("  Word 1:      {}\n", report.outputs.supply_rate));

    // Verification
    if let Some(verification) = &report.verification {
        output.push_str(&format!("\n{}\n", "On-chain Verification".cyan().bold()));
        output.push_str(&format!(
            "  getUtilization(): {}\n",
            verification.onchain_utilization
        ));
        output.push_str(&format!(
            "  getSupplyRate():  {}\n",
            verification.onchain_supply_rate
        ));
        let status = if verification.matches {
            "MATCH".green().bold()
        } else {
            "MISMATCH".red().bold()
        };
        output.push_str(&format!("  Status:           {}\n", status));
    }

    output
}
