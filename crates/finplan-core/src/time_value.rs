use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal;
use crate::error::NumericError;
use crate::types::Rate;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Monthly rate from an annual interest figure.
///
/// Anything above `1` is read as a percentage (`12` = 12%), anything else as
/// an already-normalised fraction (`0.12`). Exactly `1` therefore means 100%
/// a year. Negative inputs pass straight through.
pub fn monthly_rate(annual_interest: Rate) -> Rate {
    let annual = if annual_interest > Decimal::ONE {
        annual_interest / PERCENT
    } else {
        annual_interest
    };
    annual / MONTHS_PER_YEAR
}

/// Monthly rate from an annual figure that is always a percentage.
pub fn monthly_rate_from_percent(annual_percent: Rate) -> Rate {
    annual_percent / PERCENT / MONTHS_PER_YEAR
}

/// Annual fraction from an annual percentage (`10` -> `0.10`).
pub fn annual_rate_from_percent(annual_percent: Rate) -> Rate {
    annual_percent / PERCENT
}

/// Whole years to months; fractional years give fractional months.
pub fn years_to_months(years: Decimal) -> Decimal {
    years * MONTHS_PER_YEAR
}

/// `(1 + rate)^periods`
pub fn compound_factor(rate: Rate, periods: Decimal) -> Result<Decimal, NumericError> {
    decimal::pow(Decimal::ONE + rate, periods, "compound factor")
}
