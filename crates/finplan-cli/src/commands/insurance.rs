use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Instant;

use finplan_core::insurance::hlv::{self, SimpleHlvParams};
use finplan_core::with_metadata;

use super::elapsed_us;
use crate::input;

/// Arguments for a Human Life Value estimate
#[derive(Args)]
pub struct HlvArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long)]
    pub current_age: Option<u32>,

    #[arg(long)]
    pub retirement_age: Option<u32>,

    #[arg(long)]
    pub annual_income: Option<Decimal>,

    #[arg(long, default_value = "0")]
    pub savings: Decimal,

    #[arg(long, default_value = "0")]
    pub liabilities: Decimal,

    #[arg(long, default_value = "0")]
    pub existing_cover: Decimal,
}

pub fn run_hlv(args: HlvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params: SimpleHlvParams = match input::load(args.input.as_deref())? {
        Some(params) => params,
        None => SimpleHlvParams {
            current_age: args
                .current_age
                .ok_or("--current-age is required (or provide --input)")?,
            retirement_age: args
                .retirement_age
                .ok_or("--retirement-age is required (or provide --input)")?,
            annual_income: args
                .annual_income
                .ok_or("--annual-income is required (or provide --input)")?,
            savings: args.savings,
            liabilities: args.liabilities,
            existing_cover: args.existing_cover,
        },
    };
    let result = hlv::calculate_simple_hlv(&params)?;

    let mut warnings: Vec<String> = Vec::new();
    if result.hlv_amount.is_zero() {
        warnings.push("Savings and existing cover already meet the income-replacement need".into());
    }

    let output = with_metadata(
        "Human Life Value: income × years to retirement + liabilities − savings − cover, in crore",
        &params,
        warnings,
        elapsed_us(start),
        result,
    );
    Ok(serde_json::to_value(output)?)
}
