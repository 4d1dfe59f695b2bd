//! Loan repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::loans_math::{AmortizationRow, PrepaymentInput, PrepaymentOutcome};
use super::loans_model::{Loan, LoanPayment, LoanUpdate, NewLoan, NewLoanPayment};
use crate::errors::Result;

/// Trait defining the contract for Loan repository operations.
#[async_trait]
pub trait LoanRepositoryTrait: Send + Sync {
    /// Creates a loan with its precomputed EMI.
    async fn create(&self, user_id: &str, new_loan: NewLoan, emi: Decimal) -> Result<Loan>;

    /// Updates a loan's descriptive fields.
    async fn update(&self, user_id: &str, update: LoanUpdate) -> Result<Loan>;

    /// Deletes a loan and its payments. Returns the number of deleted loans.
    async fn delete(&self, user_id: &str, loan_id: &str) -> Result<usize>;

    /// Retrieves a loan by id.
    fn get_by_id(&self, user_id: &str, loan_id: &str) -> Result<Loan>;

    /// Lists loans, optionally only active ones.
    fn list(&self, user_id: &str, active_only: bool) -> Result<Vec<Loan>>;

    /// Records a payment with its computed split, deactivating the loan in
    /// the same write when `deactivate` is set.
    async fn insert_payment(
        &self,
        loan_id: &str,
        payment: NewLoanPayment,
        interest_component: Decimal,
        principal_component: Decimal,
        deactivate: bool,
    ) -> Result<LoanPayment>;

    /// Lists payments for a loan, oldest first.
    fn list_payments(&self, loan_id: &str) -> Result<Vec<LoanPayment>>;
}

/// Trait defining the contract for Loan service operations.
#[async_trait]
pub trait LoanServiceTrait: Send + Sync {
    /// Creates a loan, computing its EMI.
    async fn create_loan(&self, user_id: &str, new_loan: NewLoan) -> Result<Loan>;

    /// Updates a loan.
    async fn update_loan(&self, user_id: &str, update: LoanUpdate) -> Result<Loan>;

    /// Deletes a loan.
    async fn delete_loan(&self, user_id: &str, loan_id: &str) -> Result<()>;

    /// Retrieves a loan by id.
    fn get_loan(&self, user_id: &str, loan_id: &str) -> Result<Loan>;

    /// Lists loans.
    fn list_loans(&self, user_id: &str, active_only: bool) -> Result<Vec<Loan>>;

    /// Computes the baseline amortization schedule.
    fn get_schedule(&self, user_id: &str, loan_id: &str) -> Result<Vec<AmortizationRow>>;

    /// Simulates a pre-payment scenario.
    fn simulate_prepayment(
        &self,
        user_id: &str,
        loan_id: &str,
        input: &PrepaymentInput,
    ) -> Result<PrepaymentOutcome>;

    /// Records a payment, splitting it into interest and principal against
    /// the outstanding balance.
    async fn record_payment(
        &self,
        user_id: &str,
        loan_id: &str,
        payment: NewLoanPayment,
    ) -> Result<LoanPayment>;

    /// Lists a loan's recorded payments.
    fn list_payments(&self, user_id: &str, loan_id: &str) -> Result<Vec<LoanPayment>>;

    /// Outstanding principal implied by recorded payments.
    fn outstanding_balance(&self, user_id: &str, loan_id: &str) -> Result<Decimal>;
}
