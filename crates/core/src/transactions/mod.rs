//! Transactions module - domain models, services, and traits.

mod transactions_model;
#[cfg(test)]
mod transactions_model_tests;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{
    NewTransaction, Transaction, TransactionFilters, TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
