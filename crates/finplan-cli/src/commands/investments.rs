use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Instant;

use finplan_core::investments::lump_sum::{self, LumpSumParams};
use finplan_core::investments::sip::{self, SipParams};
use finplan_core::{with_metadata, DetailsOptions};

use super::elapsed_us;
use crate::input;

/// Arguments for a SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly contribution
    #[arg(long)]
    pub monthly_investment: Option<Decimal>,

    /// Expected annual return, percent
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years (fractions allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Keep decimals instead of rounding to whole currency units
    #[arg(long)]
    pub include_decimal: bool,

    /// Add a year-by-year projection
    #[arg(long)]
    pub yearly: bool,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params: SipParams = match input::load(args.input.as_deref())? {
        Some(params) => params,
        None => SipParams {
            monthly_investment: args
                .monthly_investment
                .ok_or("--monthly-investment is required (or provide --input)")?,
            annual_return_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    let options = DetailsOptions {
        include_decimal: args.include_decimal,
    };
    let details = sip::calculate_sip_details(&params, options)?;

    let mut output = serde_json::to_value(with_metadata(
        "SIP future value, annuity-due: P·((1+i)^n − 1)/i·(1+i), i = rate/100/12",
        &params,
        Vec::new(),
        elapsed_us(start),
        details,
    ))?;
    if args.yearly {
        let rows = sip::sip_yearly_projection(&params)?;
        if let Value::Object(ref mut map) = output {
            map.insert("results".into(), serde_json::to_value(rows)?);
        }
    }
    Ok(output)
}

/// Arguments for a lump-sum projection
#[derive(Args)]
pub struct LumpSumArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// One-time investment
    #[arg(long)]
    pub initial_investment: Option<Decimal>,

    /// Expected annual return, percent
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years (fractions allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Keep decimals instead of rounding to whole currency units
    #[arg(long)]
    pub include_decimal: bool,
}

pub fn run_lump_sum(args: LumpSumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params: LumpSumParams = match input::load(args.input.as_deref())? {
        Some(params) => params,
        None => LumpSumParams {
            initial_investment: args
                .initial_investment
                .ok_or("--initial-investment is required (or provide --input)")?,
            annual_return_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    let options = DetailsOptions {
        include_decimal: args.include_decimal,
    };
    let details = lump_sum::calculate_lump_sum_details(&params, options)?;
    let output = with_metadata(
        "Lump sum, annual compounding: L·(1 + rate/100)^years",
        &params,
        Vec::new(),
        elapsed_us(start),
        details,
    );
    Ok(serde_json::to_value(output)?)
}
