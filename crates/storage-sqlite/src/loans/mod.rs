//! SQLite storage implementation for loans and recorded payments.

mod model;
mod repository;

pub use model::{LoanDB, LoanPaymentDB, NewLoanDB, NewLoanPaymentDB};
pub use repository::LoanRepository;
