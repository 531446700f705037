use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal;
use crate::error::FinPlanError;
use crate::types::Money;
use crate::FinPlanResult;

/// One crore (10 million) in the source currency.
pub const CRORE: Decimal = dec!(10_000_000);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleHlvParams {
    pub current_age: u32,
    pub retirement_age: u32,
    pub annual_income: Money,
    pub savings: Money,
    pub liabilities: Money,
    pub existing_cover: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleHlvResult {
    /// Cover needed, in crore, rounded to 2 places.
    pub value: Decimal,
    pub years_left: u32,
    pub future_income: Money,
    /// Cover needed in the source currency, floored at zero.
    pub hlv_amount: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Human Life Value by the income-replacement method.
///
/// `max(0, income × years_left + liabilities − savings − existing_cover)`,
/// reported in crore.
pub fn calculate_simple_hlv(params: &SimpleHlvParams) -> FinPlanResult<SimpleHlvResult> {
    validate(params)?;

    let years_left = params.retirement_age - params.current_age;
    let future_income = decimal::mul(
        params.annual_income,
        Decimal::from(years_left),
        "HLV future income",
    )?;
    let gross = decimal::add(future_income, params.liabilities, "HLV gross need")?;
    let offsets = decimal::add(params.savings, params.existing_cover, "HLV offsets")?;
    let hlv_amount = (gross - offsets).max(Decimal::ZERO);

    if hlv_amount.is_zero() {
        tracing::debug!("existing assets and cover exceed the income-replacement need");
    }

    let value = decimal::round_half_up(decimal::div(hlv_amount, CRORE, "HLV in crore")?, 2);

    Ok(SimpleHlvResult {
        value,
        years_left,
        future_income,
        hlv_amount,
    })
}

fn validate(params: &SimpleHlvParams) -> FinPlanResult<()> {
    if params.current_age >= params.retirement_age {
        return Err(FinPlanError::invalid(
            "retirement_age",
            "retirement_age must be greater than current_age",
        ));
    }
    let money_fields = [
        ("annual_income", params.annual_income),
        ("savings", params.savings),
        ("liabilities", params.liabilities),
        ("existing_cover", params.existing_cover),
    ];
    for (field, value) in money_fields {
        if value < Decimal::ZERO {
            return Err(FinPlanError::invalid(field, "must not be negative"));
        }
    }
    Ok(())
}
