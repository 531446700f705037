use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Instant;

use finplan_core::loans::amortization::{self, AmortizationInput};
use finplan_core::loans::emi::{self, EmiCalculationParams, PrincipalFromEmiParams};
use finplan_core::{rate_warnings, with_metadata};

use super::elapsed_us;
use crate::input;

/// Arguments for the forward EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate, percent (12) or fraction (0.12)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long)]
    pub tenure_months: Option<u32>,
}

fn emi_params(args: &EmiArgs) -> Result<EmiCalculationParams, Box<dyn std::error::Error>> {
    if let Some(params) = input::load(args.input.as_deref())? {
        return Ok(params);
    }
    Ok(EmiCalculationParams {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
        tenure_months: args
            .tenure_months
            .ok_or("--tenure-months is required (or provide --input)")?,
    })
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params = emi_params(&args)?;
    let result = emi::calculate_emi(&params)?;
    let output = with_metadata(
        "Level EMI: P·r·(1+r)^n / ((1+r)^n − 1), straight-line at 0%",
        &params,
        rate_warnings("annual_interest_rate", params.annual_interest_rate),
        elapsed_us(start),
        result,
    );
    Ok(serde_json::to_value(output)?)
}

/// Arguments for recovering the principal behind an EMI
#[derive(Args)]
pub struct PrincipalArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly instalment
    #[arg(long)]
    pub emi: Option<Decimal>,

    /// Annual interest rate, percent (12) or fraction (0.12)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long)]
    pub tenure_months: Option<u32>,
}

pub fn run_principal_from_emi(args: PrincipalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let params: PrincipalFromEmiParams = match input::load(args.input.as_deref())? {
        Some(params) => params,
        None => PrincipalFromEmiParams {
            emi: args.emi.ok_or("--emi is required (or provide --input)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
        },
    };
    let principal = emi::calculate_principal_from_emi(&params)?;
    let output = with_metadata(
        "Inverse EMI: EMI·((1+r)^n − 1) / (r·(1+r)^n), EMI·n at 0%",
        &params,
        rate_warnings("annual_interest_rate", params.annual_interest_rate),
        elapsed_us(start),
        serde_json::json!({ "principal": principal }),
    );
    Ok(serde_json::to_value(output)?)
}

/// Arguments for an amortization schedule
#[derive(Args)]
pub struct AmortizationArgs {
    #[command(flatten)]
    pub loan: EmiArgs,

    /// Date of the first instalment (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Print the yearly roll-up instead of every month
    #[arg(long)]
    pub yearly: bool,
}

pub fn run_amortization(args: AmortizationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let schedule_input: AmortizationInput = match input::load(args.loan.input.as_deref())? {
        Some(input) => input,
        None => AmortizationInput {
            loan: emi_params(&args.loan)?,
            start_date: args.start_date,
        },
    };
    let schedule = amortization::amortization_schedule(&schedule_input)?;
    let warnings = rate_warnings(
        "annual_interest_rate",
        schedule_input.loan.annual_interest_rate,
    );

    // Tabular formats read the "results" array, so hand them the rows.
    let rows = if args.yearly {
        serde_json::to_value(&schedule.yearly)?
    } else {
        serde_json::to_value(&schedule.monthly)?
    };
    let mut output = serde_json::to_value(with_metadata(
        "Level-EMI amortization; final instalment clears the residual balance",
        &schedule_input,
        warnings,
        elapsed_us(start),
        &schedule.summary,
    ))?;
    if let Value::Object(ref mut map) = output {
        map.insert("results".into(), rows);
    }
    Ok(output)
}
