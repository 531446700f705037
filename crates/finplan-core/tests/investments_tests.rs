use finplan_core::investments::lump_sum::{self, LumpSumParams};
use finplan_core::investments::sip::{self, SipParams};
use finplan_core::{decimal, DetailsOptions};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

fn sample_sip() -> SipParams {
    SipParams {
        monthly_investment: dec!(2500),
        annual_return_rate: dec!(11.5),
        years: dec!(15),
    }
}

#[test]
fn test_invested_amount_identity() {
    let plans = [
        (dec!(2500), dec!(11.5), dec!(15)),
        (dec!(999.99), dec!(7), dec!(3)),
        (dec!(10000), dec!(14), dec!(1.5)),
    ];
    for (monthly, rate, years) in plans {
        let params = SipParams {
            monthly_investment: monthly,
            annual_return_rate: rate,
            years,
        };
        let d = sip::calculate_sip_details(&params, DetailsOptions::with_decimals()).unwrap();
        assert_eq!(d.invested_amt, monthly * years * dec!(12));
        assert_eq!(d.total_value, d.invested_amt + d.est_returns);
    }
}

#[test]
fn test_rounding_toggle() {
    let params = sample_sip();
    let whole = sip::calculate_sip_details(&params, DetailsOptions::whole_units()).unwrap();
    let exact = sip::calculate_sip_details(&params, DetailsOptions::with_decimals()).unwrap();

    for v in [whole.invested_amt, whole.est_returns, whole.total_value] {
        assert!(v.fract().is_zero(), "{v} should be whole");
    }
    assert!(!exact.total_value.fract().is_zero());
    assert_eq!(whole.total_value, decimal::round_half_up(exact.total_value, 0));
    assert_eq!(whole.tenure_months, 180);
    assert_eq!(exact.tenure_months, 180);
}

#[test]
fn test_sip_beats_plain_saving_at_positive_return() {
    let d = sip::calculate_sip_details(&sample_sip(), DetailsOptions::default()).unwrap();
    assert!(d.est_returns > Decimal::ZERO);
}

#[test]
fn test_sip_details_json_shape() {
    let params: SipParams =
        serde_json::from_str(r#"{"monthly_investment": "1000", "annual_return_rate": 12, "years": 1}"#)
            .unwrap();
    let d = sip::calculate_sip_details(&params, DetailsOptions::default()).unwrap();
    let json = serde_json::to_value(&d).unwrap();
    for key in ["invested_amt", "est_returns", "total_value", "rate", "tenure_months"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["tenure_months"], 12);
}

#[test]
fn test_lump_sum_growth() {
    let fv = lump_sum::calculate_lump_sum_return(&LumpSumParams {
        initial_investment: dec!(100000),
        annual_return_rate: dec!(10),
        years: dec!(1),
    })
    .unwrap();
    assert_eq!(fv, dec!(110000));
}

#[test]
fn test_lump_sum_total_value_identity() {
    let params = LumpSumParams {
        initial_investment: dec!(250000),
        annual_return_rate: dec!(9),
        years: dec!(8),
    };
    let d = lump_sum::calculate_lump_sum_details(&params, DetailsOptions::with_decimals()).unwrap();
    let growth = (Decimal::ONE + dec!(0.09)).powi(8);
    assert_eq!(d.total_value, dec!(250000) * growth);
    assert_eq!(d.invested_amt, dec!(250000));
}
