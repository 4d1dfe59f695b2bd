//! SQLite storage implementation for payment methods.

mod model;
mod repository;

pub use model::{NewPaymentMethodDB, PaymentMethodDB};
pub use repository::PaymentMethodRepository;
