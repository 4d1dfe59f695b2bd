use log::{debug, info};
use std::sync::Arc;

use rust_decimal::Decimal;

use super::loans_math::{
    amortization_schedule, monthly_emi, simulate_prepayment, split_payment, AmortizationRow,
    PrepaymentInput, PrepaymentOutcome,
};
use super::loans_model::{Loan, LoanPayment, LoanUpdate, NewLoan, NewLoanPayment};
use super::loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
use crate::errors::{LoanError, Result};

/// Service for loans, their schedules, and payment tracking.
pub struct LoanService {
    repository: Arc<dyn LoanRepositoryTrait>,
}

impl LoanService {
    /// Creates a new LoanService instance.
    pub fn new(repository: Arc<dyn LoanRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn outstanding_for(&self, loan: &Loan) -> Result<Decimal> {
        let paid_principal: Decimal = self
            .repository
            .list_payments(&loan.id)?
            .iter()
            .map(|p| p.principal_component)
            .sum();
        Ok((loan.principal - paid_principal).max(Decimal::ZERO))
    }
}

#[async_trait::async_trait]
impl LoanServiceTrait for LoanService {
    async fn create_loan(&self, user_id: &str, new_loan: NewLoan) -> Result<Loan> {
        new_loan.validate()?;
        let emi = monthly_emi(
            new_loan.principal,
            new_loan.annual_rate_pct,
            new_loan.term_months,
        )?;
        debug!(
            "Creating loan '{}' for user {} (EMI {})",
            new_loan.name, user_id, emi
        );
        self.repository.create(user_id, new_loan, emi).await
    }

    async fn update_loan(&self, user_id: &str, update: LoanUpdate) -> Result<Loan> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }

    async fn delete_loan(&self, user_id: &str, loan_id: &str) -> Result<()> {
        self.repository.delete(user_id, loan_id).await?;
        Ok(())
    }

    fn get_loan(&self, user_id: &str, loan_id: &str) -> Result<Loan> {
        self.repository.get_by_id(user_id, loan_id)
    }

    fn list_loans(&self, user_id: &str, active_only: bool) -> Result<Vec<Loan>> {
        self.repository.list(user_id, active_only)
    }

    fn get_schedule(&self, user_id: &str, loan_id: &str) -> Result<Vec<AmortizationRow>> {
        let loan = self.repository.get_by_id(user_id, loan_id)?;
        amortization_schedule(loan.principal, loan.annual_rate_pct, loan.term_months)
    }

    fn simulate_prepayment(
        &self,
        user_id: &str,
        loan_id: &str,
        input: &PrepaymentInput,
    ) -> Result<PrepaymentOutcome> {
        let loan = self.repository.get_by_id(user_id, loan_id)?;
        simulate_prepayment(loan.principal, loan.annual_rate_pct, loan.term_months, input)
    }

    async fn record_payment(
        &self,
        user_id: &str,
        loan_id: &str,
        payment: NewLoanPayment,
    ) -> Result<LoanPayment> {
        payment.validate()?;
        let loan = self.repository.get_by_id(user_id, loan_id)?;
        let outstanding = self.outstanding_for(&loan)?;
        if outstanding.is_zero() {
            return Err(LoanError::AlreadyRepaid(loan.name).into());
        }

        let (interest, principal) =
            split_payment(outstanding, loan.annual_rate_pct, payment.amount);
        let repaid = outstanding - principal <= Decimal::ZERO;
        if repaid {
            info!("Loan {} fully repaid for user {}", loan_id, user_id);
        }

        self.repository
            .insert_payment(loan_id, payment, interest, principal, repaid)
            .await
    }

    fn list_payments(&self, user_id: &str, loan_id: &str) -> Result<Vec<LoanPayment>> {
        // Ownership check before exposing payments.
        self.repository.get_by_id(user_id, loan_id)?;
        self.repository.list_payments(loan_id)
    }

    fn outstanding_balance(&self, user_id: &str, loan_id: &str) -> Result<Decimal> {
        let loan = self.repository.get_by_id(user_id, loan_id)?;
        self.outstanding_for(&loan)
    }
}
