use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use finplan_core::decimal;
use finplan_core::insurance::hlv::{self, SimpleHlvParams};
use finplan_core::investments::lump_sum::{self, LumpSumParams};
use finplan_core::investments::sip::{self, SipParams};
use finplan_core::investments::GrowthDetails;
use finplan_core::loans::amortization::{self, AmortizationInput};
use finplan_core::loans::emi::{self, EmiCalculationParams, PrincipalFromEmiParams};
use finplan_core::{DetailsOptions, NumericError};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn num(field: &str, value: f64) -> NapiResult<Decimal> {
    decimal::from_f64(field, value).map_err(to_napi_error)
}

fn out(value: Decimal) -> NapiResult<f64> {
    decimal::to_f64(value).map_err(to_napi_error)
}

fn whole(field: &str, value: f64) -> NapiResult<u32> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(to_napi_error(NumericError::Malformed {
            field: field.into(),
            input: value.to_string(),
        }));
    }
    Ok(value as u32)
}

fn details_options(include_decimal: Option<bool>) -> DetailsOptions {
    DetailsOptions {
        include_decimal: include_decimal.unwrap_or(false),
    }
}

// ---------------------------------------------------------------------------
// JSON entry points (Decimal values travel as strings)
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi_json(input_json: String) -> NapiResult<String> {
    let input: EmiCalculationParams = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_principal_from_emi_json(input_json: String) -> NapiResult<String> {
    let input: PrincipalFromEmiParams =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let principal = emi::calculate_principal_from_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&principal).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule_json(input_json: String) -> NapiResult<String> {
    let input: AmortizationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::amortization_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_sip_details_json(input_json: String, include_decimal: Option<bool>) -> NapiResult<String> {
    let input: SipParams = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sip::calculate_sip_details(&input, details_options(include_decimal))
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sip_yearly_projection_json(input_json: String) -> NapiResult<String> {
    let input: SipParams = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sip::sip_yearly_projection(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_lump_sum_details_json(
    input_json: String,
    include_decimal: Option<bool>,
) -> NapiResult<String> {
    let input: LumpSumParams = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = lump_sum::calculate_lump_sum_details(&input, details_options(include_decimal))
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_simple_hlv_json(input_json: String) -> NapiResult<String> {
    let input: SimpleHlvParams = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = hlv::calculate_simple_hlv(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Plain-number entry points
// ---------------------------------------------------------------------------

#[napi(object)]
pub struct EmiInput {
    pub principal: f64,
    pub annual_interest_rate: f64,
    pub tenure_months: f64,
}

#[napi(object)]
pub struct EmiOutput {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub tenure: u32,
}

#[napi(object)]
pub struct PrincipalInput {
    pub emi: f64,
    pub tenure_months: f64,
    pub annual_interest_rate: f64,
}

#[napi(object)]
pub struct SipInput {
    pub monthly_investment: f64,
    pub annual_return_rate: f64,
    pub years: f64,
}

#[napi(object)]
pub struct LumpSumInput {
    pub initial_investment: f64,
    pub annual_return_rate: f64,
    pub years: f64,
}

#[napi(object)]
pub struct DetailsOutput {
    pub invested_amt: f64,
    pub est_returns: f64,
    pub total_value: f64,
    pub rate: f64,
    pub tenure_months: u32,
}

#[napi(object)]
pub struct HlvInput {
    pub current_age: f64,
    pub retirement_age: f64,
    pub annual_income: f64,
    pub savings: f64,
    pub liabilities: f64,
    pub existing_cover: f64,
}

fn details_output(d: GrowthDetails) -> NapiResult<DetailsOutput> {
    Ok(DetailsOutput {
        invested_amt: out(d.invested_amt)?,
        est_returns: out(d.est_returns)?,
        total_value: out(d.total_value)?,
        rate: out(d.rate)?,
        tenure_months: d.tenure_months,
    })
}

#[napi]
pub fn calculate_emi(input: EmiInput) -> NapiResult<EmiOutput> {
    let params = EmiCalculationParams {
        principal: num("principal", input.principal)?,
        annual_interest_rate: num("annual_interest_rate", input.annual_interest_rate)?,
        tenure_months: whole("tenure_months", input.tenure_months)?,
    };
    let result = emi::calculate_emi(&params).map_err(to_napi_error)?;
    Ok(EmiOutput {
        emi: out(result.emi)?,
        total_payment: out(result.total_payment)?,
        total_interest: out(result.total_interest)?,
        tenure: result.tenure,
    })
}

#[napi]
pub fn calculate_principal_from_emi(input: PrincipalInput) -> NapiResult<f64> {
    let params = PrincipalFromEmiParams {
        emi: num("emi", input.emi)?,
        tenure_months: whole("tenure_months", input.tenure_months)?,
        annual_interest_rate: num("annual_interest_rate", input.annual_interest_rate)?,
    };
    out(emi::calculate_principal_from_emi(&params).map_err(to_napi_error)?)
}

#[napi]
pub fn calculate_sip_details(input: SipInput, include_decimal: Option<bool>) -> NapiResult<DetailsOutput> {
    let params = SipParams {
        monthly_investment: num("monthly_investment", input.monthly_investment)?,
        annual_return_rate: num("annual_return_rate", input.annual_return_rate)?,
        years: num("years", input.years)?,
    };
    let d = sip::calculate_sip_details(&params, details_options(include_decimal))
        .map_err(to_napi_error)?;
    details_output(d)
}

#[napi]
pub fn calculate_lump_sum_details(
    input: LumpSumInput,
    include_decimal: Option<bool>,
) -> NapiResult<DetailsOutput> {
    let params = LumpSumParams {
        initial_investment: num("initial_investment", input.initial_investment)?,
        annual_return_rate: num("annual_return_rate", input.annual_return_rate)?,
        years: num("years", input.years)?,
    };
    let d = lump_sum::calculate_lump_sum_details(&params, details_options(include_decimal))
        .map_err(to_napi_error)?;
    details_output(d)
}

#[napi]
pub fn calculate_simple_hlv(input: HlvInput) -> NapiResult<f64> {
    let params = SimpleHlvParams {
        current_age: whole("current_age", input.current_age)?,
        retirement_age: whole("retirement_age", input.retirement_age)?,
        annual_income: num("annual_income", input.annual_income)?,
        savings: num("savings", input.savings)?,
        liabilities: num("liabilities", input.liabilities)?,
        existing_cover: num("existing_cover", input.existing_cover)?,
    };
    out(hlv::calculate_simple_hlv(&params).map_err(to_napi_error)?.value)
}
