use serde::{Deserialize, Serialize};

use super::{build_details, require_positive_years, GrowthDetails};
use crate::time_value::{annual_rate_from_percent, compound_factor};
use crate::types::{DetailsOptions, Money, Rate, Years};
use crate::{decimal, FinPlanResult};

pub type LumpSumDetailsResult = GrowthDetails;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumParams {
    pub initial_investment: Money,
    /// Expected annual return in percent (`10` = 10%).
    pub annual_return_rate: Rate,
    pub years: Years,
}

/// Future value of a one-time investment with annual compounding.
pub fn calculate_lump_sum_return(params: &LumpSumParams) -> FinPlanResult<Money> {
    require_positive_years(params.years)?;
    let growth = compound_factor(annual_rate_from_percent(params.annual_return_rate), params.years)?;
    Ok(decimal::mul(params.initial_investment, growth, "lump-sum future value")?)
}

pub fn calculate_lump_sum_details(
    params: &LumpSumParams,
    options: DetailsOptions,
) -> FinPlanResult<LumpSumDetailsResult> {
    let total_value = calculate_lump_sum_return(params)?;
    build_details(
        params.initial_investment,
        total_value,
        params.annual_return_rate,
        params.years,
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn lump(amount: Decimal, rate: Decimal, years: Decimal) -> LumpSumParams {
        LumpSumParams {
            initial_investment: amount,
            annual_return_rate: rate,
            years,
        }
    }

    #[test]
    fn test_lump_sum_one_year() {
        let fv = calculate_lump_sum_return(&lump(dec!(100000), dec!(10), dec!(1))).unwrap();
        assert_eq!(fv, dec!(110000));
    }

    #[test]
    fn test_lump_sum_zero_rate_keeps_capital() {
        let fv = calculate_lump_sum_return(&lump(dec!(50000), dec!(0), dec!(7))).unwrap();
        assert_eq!(fv, dec!(50000));
    }

    #[test]
    fn test_lump_sum_fractional_years() {
        // 1.21^0.5 = 1.1
        let fv = calculate_lump_sum_return(&lump(dec!(1000), dec!(21), dec!(0.5))).unwrap();
        assert!((fv - dec!(1100)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_lump_sum_rate_below_minus_hundred_is_undefined() {
        use crate::error::{FinPlanError, NumericError};
        // 1 + (-150%) = -0.5, and (-0.5)^0.5 is not real
        let err = calculate_lump_sum_return(&lump(dec!(1000), dec!(-150), dec!(0.5))).unwrap_err();
        assert!(matches!(
            err,
            FinPlanError::Numeric(NumericError::Undefined { .. })
        ));
    }

    #[test]
    fn test_lump_sum_details() {
        let d = calculate_lump_sum_details(
            &lump(dec!(100000), dec!(12), dec!(5)),
            DetailsOptions::default(),
        )
        .unwrap();
        // 100000 x 1.12^5 = 176234.1683
        assert_eq!(d.invested_amt, dec!(100000));
        assert_eq!(d.total_value, dec!(176234));
        assert_eq!(d.est_returns, dec!(76234));
        assert_eq!(d.tenure_months, 60);
    }

    #[test]
    fn test_lump_sum_details_keep_decimals() {
        let d = calculate_lump_sum_details(
            &lump(dec!(100000), dec!(12), dec!(5)),
            DetailsOptions::with_decimals(),
        )
        .unwrap();
        assert_eq!(d.total_value, dec!(176234.16832));
        assert_eq!(d.est_returns, dec!(76234.16832));
    }
}
