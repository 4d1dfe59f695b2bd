//! FinFusion Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for FinFusion.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod accounts;
pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod loans;
pub mod notifications;
pub mod payment_methods;
pub mod recurring;
pub mod transactions;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
