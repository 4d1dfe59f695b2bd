//! Standard amortization math over `rust_decimal`.
//!
//! All published amounts are rounded to 2 decimal places; the final
//! schedule row absorbs the accumulated rounding so the balance lands
//! exactly on zero.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};

/// One month of an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// 1-based month number.
    pub month: i32,
    pub payment: Decimal,
    pub interest: Decimal,
    pub principal: Decimal,
    pub balance: Decimal,
}

/// Totals for a full schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub months: i32,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
}

/// Pre-payment scenario parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrepaymentInput {
    /// Extra amount added to every monthly payment.
    #[serde(default)]
    pub extra_monthly: Decimal,
    /// One-time lump sum applied after the payment of `lump_sum_month`.
    pub lump_sum: Option<Decimal>,
    pub lump_sum_month: Option<i32>,
}

/// Result of comparing a pre-payment scenario against the baseline schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepaymentOutcome {
    pub baseline: ScheduleSummary,
    pub scenario: ScheduleSummary,
    pub months_saved: i32,
    pub interest_saved: Decimal,
    pub schedule: Vec<AmortizationRow>,
}

fn monthly_rate(annual_rate_pct: Decimal) -> Decimal {
    annual_rate_pct / dec!(12) / dec!(100)
}

fn validate_terms(principal: Decimal, annual_rate_pct: Decimal, term_months: i32) -> Result<()> {
    if principal <= Decimal::ZERO {
        return Err(LoanError::InvalidPrincipal(principal.to_string()).into());
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(LoanError::InvalidRate(annual_rate_pct.to_string()).into());
    }
    if term_months < 1 {
        return Err(LoanError::InvalidTerm(term_months).into());
    }
    Ok(())
}

/// Computes the fixed monthly installment (EMI).
///
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with monthly rate `r`; a zero-rate
/// loan degenerates to `P / n`.
pub fn monthly_emi(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: i32,
) -> Result<Decimal> {
    validate_terms(principal, annual_rate_pct, term_months)?;
    let r = monthly_rate(annual_rate_pct);
    if r.is_zero() {
        return Ok((principal / Decimal::from(term_months)).round_dp(2));
    }
    let factor = (Decimal::ONE + r).powi(term_months as i64);
    Ok((principal * r * factor / (factor - Decimal::ONE)).round_dp(2))
}

/// Builds the month-by-month schedule for a loan paid with `payment` each
/// month plus optional scenario adjustments. The final row is truncated so
/// the balance ends at exactly zero, and the schedule never runs past
/// `term_months`: the installment at the term boundary settles whatever
/// rounding drift left on the balance.
fn build_schedule(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: i32,
    payment: Decimal,
    prepayment: Option<&PrepaymentInput>,
) -> Result<Vec<AmortizationRow>> {
    let r = monthly_rate(annual_rate_pct);
    let mut balance = principal;
    let mut rows = Vec::new();
    let mut month = 0;

    // A payment that does not cover the first month's interest would never
    // amortize.
    let first_interest = (balance * r).round_dp(2);
    if payment <= first_interest {
        return Err(LoanError::InvalidPayment(payment.to_string()).into());
    }

    while balance > Decimal::ZERO {
        month += 1;
        let interest = (balance * r).round_dp(2);
        let mut due = payment;
        if let Some(p) = prepayment {
            due += p.extra_monthly;
        }

        let mut principal_part = due - interest;
        let mut actual_payment = due;
        if principal_part >= balance || month == term_months {
            // Final installment: pay exactly what remains.
            principal_part = balance;
            actual_payment = balance + interest;
        }
        balance -= principal_part;

        // Lump sum lands after the scheduled payment of its month.
        if let Some(p) = prepayment {
            if let (Some(lump), Some(lump_month)) = (p.lump_sum, p.lump_sum_month) {
                if lump_month == month && balance > Decimal::ZERO {
                    let applied = lump.min(balance);
                    balance -= applied;
                    principal_part += applied;
                    actual_payment += applied;
                }
            }
        }

        rows.push(AmortizationRow {
            month,
            payment: actual_payment,
            interest,
            principal: principal_part,
            balance,
        });
    }

    Ok(rows)
}

fn summarize(rows: &[AmortizationRow]) -> ScheduleSummary {
    ScheduleSummary {
        months: rows.len() as i32,
        total_paid: rows.iter().map(|r| r.payment).sum(),
        total_interest: rows.iter().map(|r| r.interest).sum(),
    }
}

/// Computes the baseline amortization schedule for a loan.
pub fn amortization_schedule(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: i32,
) -> Result<Vec<AmortizationRow>> {
    let emi = monthly_emi(principal, annual_rate_pct, term_months)?;
    build_schedule(principal, annual_rate_pct, term_months, emi, None)
}

/// Simulates a pre-payment scenario against the baseline schedule.
pub fn simulate_prepayment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: i32,
    input: &PrepaymentInput,
) -> Result<PrepaymentOutcome> {
    if input.extra_monthly < Decimal::ZERO {
        return Err(LoanError::InvalidPayment(input.extra_monthly.to_string()).into());
    }
    if let Some(lump) = input.lump_sum {
        if lump <= Decimal::ZERO {
            return Err(LoanError::InvalidPayment(lump.to_string()).into());
        }
    }

    let emi = monthly_emi(principal, annual_rate_pct, term_months)?;
    let baseline_rows = build_schedule(principal, annual_rate_pct, term_months, emi, None)?;
    let scenario_rows = build_schedule(principal, annual_rate_pct, term_months, emi, Some(input))?;

    let baseline = summarize(&baseline_rows);
    let scenario = summarize(&scenario_rows);
    let months_saved = baseline.months - scenario.months;
    let interest_saved = baseline.total_interest - scenario.total_interest;

    Ok(PrepaymentOutcome {
        baseline,
        scenario,
        months_saved,
        interest_saved,
        schedule: scenario_rows,
    })
}

/// Splits a payment against an outstanding balance into interest and
/// principal components. Interest accrues first; anything left reduces
/// principal, capped at the outstanding balance.
pub fn split_payment(
    outstanding: Decimal,
    annual_rate_pct: Decimal,
    amount: Decimal,
) -> (Decimal, Decimal) {
    let r = monthly_rate(annual_rate_pct);
    let interest = (outstanding * r).round_dp(2).min(amount);
    let principal = (amount - interest).min(outstanding);
    (interest, principal)
}
