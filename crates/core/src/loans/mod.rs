//! Loans module - tracked debts, EMI math, amortization, and pre-payment
//! scenario modeling.

mod loans_math;
#[cfg(test)]
mod loans_math_tests;
mod loans_model;
mod loans_service;
mod loans_traits;

pub use loans_math::{
    amortization_schedule, monthly_emi, simulate_prepayment, AmortizationRow, PrepaymentInput,
    PrepaymentOutcome, ScheduleSummary,
};
pub use loans_model::{Loan, LoanPayment, LoanUpdate, NewLoan, NewLoanPayment};
pub use loans_service::LoanService;
pub use loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
