use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal;
use crate::time_value::{compound_factor, monthly_rate};
use crate::types::{Money, Rate};
use crate::FinPlanResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the forward EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiCalculationParams {
    pub principal: Money,
    /// Annual rate, either as a percent (`12`) or a fraction (`0.12`).
    pub annual_interest_rate: Rate,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiCalculationResult {
    pub emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub tenure: u32,
}

/// Input for recovering the principal behind a known EMI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalFromEmiParams {
    pub emi: Money,
    pub tenure_months: u32,
    pub annual_interest_rate: Rate,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Equated monthly instalment for an amortising loan.
///
/// `EMI = P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate. A zero
/// rate repays the principal in equal straight-line instalments.
///
/// Principal and tenure are not range-checked; a zero tenure surfaces as a
/// division-by-zero error.
pub fn calculate_emi(params: &EmiCalculationParams) -> FinPlanResult<EmiCalculationResult> {
    let r = monthly_rate(params.annual_interest_rate);
    let n = Decimal::from(params.tenure_months);

    if r.is_zero() {
        tracing::debug!(tenure_months = params.tenure_months, "zero-rate EMI");
        let emi = decimal::div(params.principal, n, "EMI over zero tenure")?;
        return Ok(EmiCalculationResult {
            emi,
            total_payment: params.principal,
            total_interest: Decimal::ZERO,
            tenure: params.tenure_months,
        });
    }

    let factor = compound_factor(r, n)?;
    let numerator = decimal::mul(
        decimal::mul(params.principal, r, "EMI numerator")?,
        factor,
        "EMI numerator",
    )?;
    let emi = decimal::div(numerator, factor - Decimal::ONE, "EMI annuity factor")?;
    let total_payment = decimal::mul(emi, n, "EMI total payment")?;
    let total_interest = decimal::sub(total_payment, params.principal, "EMI total interest")?;

    tracing::trace!(%r, %emi, "EMI computed");

    Ok(EmiCalculationResult {
        emi,
        total_payment,
        total_interest,
        tenure: params.tenure_months,
    })
}

/// Principal that a given EMI amortises over the tenure.
///
/// Algebraic inverse of [`calculate_emi`]:
/// `P = EMI·((1+r)^n − 1) / (r·(1+r)^n)`, or `EMI·n` at a zero rate.
pub fn calculate_principal_from_emi(params: &PrincipalFromEmiParams) -> FinPlanResult<Money> {
    let r = monthly_rate(params.annual_interest_rate);
    let n = Decimal::from(params.tenure_months);

    if r.is_zero() {
        return Ok(decimal::mul(params.emi, n, "principal from EMI")?);
    }

    let factor = compound_factor(r, n)?;
    let numerator = decimal::mul(params.emi, factor - Decimal::ONE, "principal from EMI")?;
    let denominator = decimal::mul(r, factor, "principal from EMI")?;
    Ok(decimal::div(numerator, denominator, "principal from EMI")?)
}
