//! Recurring transactions module - templates replayed on a schedule.
//!
//! There is no background scheduler here: due templates are materialized
//! into real transactions through an explicit service operation.

mod recurring_model;
#[cfg(test)]
mod recurring_model_tests;
mod recurring_service;
mod recurring_traits;

pub use recurring_model::{
    next_occurrence, Frequency, NewRecurringTransaction, RecurringTransaction,
    RecurringTransactionUpdate,
};
pub use recurring_service::RecurringService;
pub use recurring_traits::{RecurringRepositoryTrait, RecurringServiceTrait};
