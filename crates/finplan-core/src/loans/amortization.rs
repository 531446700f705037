use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::emi::{calculate_emi, EmiCalculationParams, EmiCalculationResult};
use crate::decimal;
use crate::error::FinPlanError;
use crate::time_value::monthly_rate;
use crate::types::Money;
use crate::FinPlanResult;

/// Longest schedule we are willing to materialise (100 years).
const MAX_SCHEDULE_MONTHS: u32 = 1200;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    #[serde(flatten)]
    pub loan: EmiCalculationParams,
    /// Date of the first instalment. Later instalments fall on the same day
    /// of each following month (clamped to month end).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub opening_balance: Money,
    pub emi: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub summary: EmiCalculationResult,
    pub monthly: Vec<AmortizationRow>,
    pub yearly: Vec<AmortizationYear>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Month-by-month repayment schedule for a level-EMI loan.
///
/// Each month's interest is the opening balance times the monthly rate; the
/// rest of the EMI retires principal. The last instalment clears whatever
/// balance remains, so the schedule always closes at exactly zero.
pub fn amortization_schedule(input: &AmortizationInput) -> FinPlanResult<AmortizationSchedule> {
    let loan = &input.loan;
    if loan.tenure_months == 0 {
        return Err(FinPlanError::invalid("tenure_months", "must be at least 1"));
    }
    if loan.tenure_months > MAX_SCHEDULE_MONTHS {
        return Err(FinPlanError::invalid(
            "tenure_months",
            format!("schedules are limited to {MAX_SCHEDULE_MONTHS} months"),
        ));
    }

    let summary = calculate_emi(loan)?;
    let r = monthly_rate(loan.annual_interest_rate);

    let mut monthly = Vec::with_capacity(loan.tenure_months as usize);
    let mut yearly: Vec<AmortizationYear> = Vec::new();
    let mut balance = loan.principal;

    for month in 1..=loan.tenure_months {
        let opening = balance;
        let interest = decimal::mul(opening, r, "monthly interest")?;
        let principal = if month == loan.tenure_months {
            opening
        } else {
            summary.emi - interest
        };
        let emi = interest + principal;
        balance = opening - principal;

        let payment_date = match input.start_date {
            Some(start) => Some(
                start
                    .checked_add_months(Months::new(month - 1))
                    .ok_or_else(|| {
                        FinPlanError::invalid("start_date", "payment date out of range")
                    })?,
            ),
            None => None,
        };

        let year = (month - 1) / 12 + 1;
        match yearly.last_mut() {
            Some(y) if y.year == year => {
                y.principal_paid += principal;
                y.interest_paid += interest;
                y.closing_balance = balance;
            }
            _ => yearly.push(AmortizationYear {
                year,
                principal_paid: principal,
                interest_paid: interest,
                closing_balance: balance,
            }),
        }

        monthly.push(AmortizationRow {
            month,
            payment_date,
            opening_balance: opening,
            emi,
            interest,
            principal,
            closing_balance: balance,
        });
    }

    debug_assert!(balance.is_zero());
    tracing::debug!(
        months = monthly.len(),
        years = yearly.len(),
        "amortization schedule built"
    );

    Ok(AmortizationSchedule {
        summary,
        monthly,
        yearly,
    })
}

/// Sum of interest across a schedule.
pub fn total_interest(schedule: &AmortizationSchedule) -> Money {
    schedule
        .monthly
        .iter()
        .fold(Decimal::ZERO, |acc, row| acc + row.interest)
}
