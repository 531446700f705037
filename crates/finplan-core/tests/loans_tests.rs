use finplan_core::loans::amortization::{self, AmortizationInput};
use finplan_core::loans::emi::{self, EmiCalculationParams, EmiCalculationResult, PrincipalFromEmiParams};
use finplan_core::{FinPlanError, NumericError};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn loan(principal: Decimal, rate: Decimal, months: u32) -> EmiCalculationParams {
    EmiCalculationParams {
        principal,
        annual_interest_rate: rate,
        tenure_months: months,
    }
}

// ===========================================================================
// Forward EMI
// ===========================================================================

#[test]
fn test_zero_rate_emi() {
    let result = emi::calculate_emi(&loan(dec!(120000), dec!(0), 12)).unwrap();
    assert_eq!(
        result,
        EmiCalculationResult {
            emi: dec!(10000),
            total_payment: dec!(120000),
            total_interest: dec!(0),
            tenure: 12,
        }
    );
}

#[test]
fn test_known_emi_value() {
    let result = emi::calculate_emi(&loan(dec!(100000), dec!(12), 12)).unwrap();
    assert!((result.emi - dec!(8884.88)).abs() < dec!(0.005));
    assert!((result.total_interest - dec!(6618.55)).abs() < dec!(0.005));
}

#[test]
fn test_home_loan_twenty_years() {
    // 50L at 8.5% over 240 months -> EMI ~43,391
    let result = emi::calculate_emi(&loan(dec!(5_000_000), dec!(8.5), 240)).unwrap();
    assert!((result.emi - dec!(43391.16)).abs() < dec!(0.01));
    // Interest over twenty years exceeds the amount borrowed
    assert!(result.total_interest > dec!(5_000_000));
}

#[test]
fn test_rate_of_exactly_one_means_hundred_percent() {
    let one = emi::calculate_emi(&loan(dec!(10000), dec!(1), 12)).unwrap();
    let hundred = emi::calculate_emi(&loan(dec!(10000), dec!(100), 12)).unwrap();
    assert_eq!(one, hundred);
}

#[test]
fn test_zero_tenure_surfaces_numeric_error() {
    let err = emi::calculate_emi(&loan(dec!(10000), dec!(10), 0)).unwrap_err();
    assert!(matches!(
        err,
        FinPlanError::Numeric(NumericError::DivisionByZero { .. })
    ));
}

// ===========================================================================
// Inverse EMI
// ===========================================================================

#[test]
fn test_forward_inverse_round_trip() {
    let cases = [
        (dec!(100000), dec!(12), 12),
        (dec!(2500000), dec!(8.75), 180),
        (dec!(75000), dec!(0.18), 24),
        (dec!(1000), dec!(0), 7),
        (dec!(999999.99), dec!(1), 360),
        (dec!(40000), dec!(0.5), 1),
    ];
    for (principal, rate, months) in cases {
        let forward = emi::calculate_emi(&loan(principal, rate, months)).unwrap();
        let recovered = emi::calculate_principal_from_emi(&PrincipalFromEmiParams {
            emi: forward.emi,
            tenure_months: months,
            annual_interest_rate: rate,
        })
        .unwrap();
        let relative = ((recovered - principal) / principal).abs();
        assert!(
            relative < dec!(0.000001),
            "principal {principal} at {rate} over {months}m came back as {recovered}"
        );
    }
}

// ===========================================================================
// Amortization
// ===========================================================================

#[test]
fn test_schedule_serializes_with_flattened_loan() {
    let input: AmortizationInput = serde_json::from_str(
        r#"{"principal": 60000, "annual_interest_rate": 10, "tenure_months": 6, "start_date": "2025-01-15"}"#,
    )
    .unwrap();
    let schedule = amortization::amortization_schedule(&input).unwrap();
    assert_eq!(schedule.monthly.len(), 6);
    assert_eq!(
        schedule.monthly[5].payment_date.unwrap().to_string(),
        "2025-06-15"
    );
    assert_eq!(schedule.yearly.len(), 1);
    assert_eq!(schedule.yearly[0].closing_balance, Decimal::ZERO);
}
