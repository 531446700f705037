pub mod lump_sum;
pub mod sip;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal;
use crate::error::FinPlanError;
use crate::time_value::years_to_months;
use crate::types::{DetailsOptions, Money, Rate, Years};
use crate::FinPlanResult;

/// Invested amount, projected value and the gain between them.
///
/// Shared by the SIP and lump-sum calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthDetails {
    pub invested_amt: Money,
    pub est_returns: Money,
    pub total_value: Money,
    /// Annual return rate as supplied (percent).
    pub rate: Rate,
    pub tenure_months: u32,
}

fn require_positive_years(years: Years) -> FinPlanResult<()> {
    if years <= Decimal::ZERO {
        return Err(FinPlanError::invalid("years", "must be greater than zero"));
    }
    Ok(())
}

/// Whole months in the horizon, midpoints rounded up. Horizons that round
/// to zero months are rejected.
fn whole_months(years: Years) -> FinPlanResult<u32> {
    let months = decimal::round_half_up(years_to_months(years), 0)
        .to_u32()
        .ok_or_else(|| FinPlanError::invalid("years", "horizon does not fit in a month count"))?;
    if months == 0 {
        return Err(FinPlanError::invalid(
            "years",
            "horizon must be at least half a month",
        ));
    }
    Ok(months)
}

fn build_details(
    invested_amt: Money,
    total_value: Money,
    rate: Rate,
    years: Years,
    options: DetailsOptions,
) -> FinPlanResult<GrowthDetails> {
    let est_returns = decimal::sub(total_value, invested_amt, "estimated returns")?;
    let round = |v: Money| {
        if options.include_decimal {
            v
        } else {
            decimal::round_half_up(v, 0)
        }
    };
    Ok(GrowthDetails {
        invested_amt: round(invested_amt),
        est_returns: round(est_returns),
        total_value: round(total_value),
        rate,
        tenure_months: whole_months(years)?,
    })
}
