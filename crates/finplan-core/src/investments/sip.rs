use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{build_details, require_positive_years, GrowthDetails};
use crate::decimal;
use crate::error::FinPlanError;
use crate::time_value::{compound_factor, monthly_rate_from_percent, years_to_months};
use crate::types::{DetailsOptions, Money, Rate, Years};
use crate::FinPlanResult;

pub type SipDetailsResult = GrowthDetails;

/// Longest horizon a yearly projection will enumerate.
const MAX_PROJECTION_YEARS: Decimal = dec!(100);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipParams {
    pub monthly_investment: Money,
    /// Expected annual return in percent (`12` = 12%).
    pub annual_return_rate: Rate,
    pub years: Years,
}

/// Position of a SIP at the end of one year of the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipYear {
    pub year: Years,
    pub invested_amt: Money,
    pub total_value: Money,
    pub est_returns: Money,
}

/// Future value of a monthly SIP, contributions at the start of each month.
///
/// `FV = P · ((1+i)^n − 1) / i · (1+i)`, `i = rate/100/12`, `n = years·12`.
/// A 0% return has no closed form here and is reported as a division by zero.
pub fn calculate_sip_return(params: &SipParams) -> FinPlanResult<Money> {
    require_positive_years(params.years)?;
    let months = years_to_months(params.years);
    annuity_due_value(params.monthly_investment, params.annual_return_rate, months)
}

/// Invested amount, estimated returns and total value of a SIP.
pub fn calculate_sip_details(
    params: &SipParams,
    options: DetailsOptions,
) -> FinPlanResult<SipDetailsResult> {
    let total_value = calculate_sip_return(params)?;
    let invested_amt = decimal::mul(
        params.monthly_investment,
        years_to_months(params.years),
        "SIP invested amount",
    )?;
    build_details(
        invested_amt,
        total_value,
        params.annual_return_rate,
        params.years,
        options,
    )
}

/// Year-end snapshots of a SIP. A fractional final year gets its own row.
pub fn sip_yearly_projection(params: &SipParams) -> FinPlanResult<Vec<SipYear>> {
    require_positive_years(params.years)?;
    if params.years > MAX_PROJECTION_YEARS {
        return Err(FinPlanError::invalid(
            "years",
            format!("yearly projections are limited to {MAX_PROJECTION_YEARS} years"),
        ));
    }

    let mut checkpoints: Vec<Years> = Vec::new();
    let mut year = Decimal::ONE;
    while year <= params.years {
        checkpoints.push(year);
        year += Decimal::ONE;
    }
    if !params.years.fract().is_zero() {
        checkpoints.push(params.years);
    }

    checkpoints
        .into_iter()
        .map(|y| -> FinPlanResult<SipYear> {
            let months = years_to_months(y);
            let invested_amt = decimal::mul(params.monthly_investment, months, "SIP invested amount")?;
            let total_value =
                annuity_due_value(params.monthly_investment, params.annual_return_rate, months)?;
            let est_returns = decimal::sub(total_value, invested_amt, "SIP estimated returns")?;
            Ok(SipYear {
                year: y,
                invested_amt,
                total_value,
                est_returns,
            })
        })
        .collect()
}

fn annuity_due_value(payment: Money, annual_percent: Rate, months: Decimal) -> FinPlanResult<Money> {
    let i = monthly_rate_from_percent(annual_percent);
    let growth = compound_factor(i, months)?;
    let accumulated = decimal::div(growth - Decimal::ONE, i, "SIP monthly return rate")?;
    let fv = decimal::mul(payment, accumulated, "SIP future value")?;
    Ok(decimal::mul(fv, Decimal::ONE + i, "SIP future value")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumericError;

    fn sip(monthly: Decimal, rate: Decimal, years: Decimal) -> SipParams {
        SipParams {
            monthly_investment: monthly,
            annual_return_rate: rate,
            years,
        }
    }

    #[test]
    fn test_sip_contributions_earn_from_start_of_month() {
        // 1000 x (1.01^3 - 1) / 0.01 x 1.01
        let fv = calculate_sip_return(&sip(dec!(1000), dec!(12), dec!(0.25))).unwrap();
        assert_eq!(fv, dec!(3060.401));
    }

    #[test]
    fn test_sip_known_value() {
        // 5,000/month, 12% p.a., 10 years -> ~11.6 lakh
        let fv = calculate_sip_return(&sip(dec!(5000), dec!(12), dec!(10))).unwrap();
        assert!((fv - dec!(1161695.38)).abs() < dec!(0.01));
    }

    #[test]
    fn test_sip_zero_rate_is_division_by_zero() {
        let err = calculate_sip_return(&sip(dec!(1000), dec!(0), dec!(5))).unwrap_err();
        assert!(matches!(
            err,
            FinPlanError::Numeric(NumericError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_sip_non_positive_years_rejected() {
        let err = calculate_sip_return(&sip(dec!(1000), dec!(12), dec!(0))).unwrap_err();
        assert!(matches!(err, FinPlanError::InvalidInput { .. }));
    }

    #[test]
    fn test_sip_details_rounded_by_default() {
        let d = calculate_sip_details(&sip(dec!(5000), dec!(12), dec!(10)), DetailsOptions::default())
            .unwrap();
        assert_eq!(d.invested_amt, dec!(600000));
        assert_eq!(d.total_value, dec!(1161695));
        assert_eq!(d.est_returns, dec!(561695));
        assert_eq!(d.tenure_months, 120);
        assert_eq!(d.rate, dec!(12));
    }

    #[test]
    fn test_sip_details_with_decimals() {
        let d = calculate_sip_details(
            &sip(dec!(5000), dec!(12), dec!(10)),
            DetailsOptions::with_decimals(),
        )
        .unwrap();
        assert!(!d.total_value.fract().is_zero());
        assert_eq!(d.total_value, d.invested_amt + d.est_returns);
    }

    #[test]
    fn test_yearly_projection_matches_details() {
        let params = sip(dec!(2000), dec!(10), dec!(3));
        let rows = sip_yearly_projection(&params).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].invested_amt, dec!(24000));
        assert_eq!(rows[2].total_value, calculate_sip_return(&params).unwrap());
        assert_eq!(rows[2].est_returns, rows[2].total_value - rows[2].invested_amt);
    }

    #[test]
    fn test_yearly_projection_caps_horizon() {
        let rows = sip_yearly_projection(&sip(dec!(1000), dec!(8), dec!(100))).unwrap();
        assert_eq!(rows.len(), 100);

        let err = sip_yearly_projection(&sip(dec!(1000), dec!(8), dec!(100.5))).unwrap_err();
        assert!(matches!(err, FinPlanError::InvalidInput { ref field, .. } if field == "years"));

        let err = sip_yearly_projection(&sip(dec!(1000), dec!(8), dec!(2_000_000))).unwrap_err();
        assert!(matches!(err, FinPlanError::InvalidInput { .. }));
    }

    #[test]
    fn test_sip_below_one_month_is_rejected() {
        // 0.04 years is under half a month
        let err = calculate_sip_details(&sip(dec!(1000), dec!(12), dec!(0.04)), DetailsOptions::default())
            .unwrap_err();
        assert!(matches!(err, FinPlanError::InvalidInput { ref field, .. } if field == "years"));
    }

    #[test]
    fn test_sip_negative_rate_with_fractional_months_is_undefined() {
        // i = -1500/1200 < -1, so (1+i)^1.2 has no real value
        let err = calculate_sip_details(&sip(dec!(1000), dec!(-1500), dec!(0.1)), DetailsOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            FinPlanError::Numeric(NumericError::Undefined { .. })
        ));
    }

    #[test]
    fn test_yearly_projection_fractional_tail() {
        let rows = sip_yearly_projection(&sip(dec!(1000), dec!(8), dec!(2.5))).unwrap();
        let years: Vec<_> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![dec!(1), dec!(2), dec!(2.5)]);
        assert_eq!(rows[2].invested_amt, dec!(30000));
    }
}
