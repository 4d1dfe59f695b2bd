//! SQLite storage implementation for accounts.

mod model;
mod repository;

pub use model::{AccountDB, NewAccountDB};
pub use repository::AccountRepository;
pub(crate) use repository::apply_balance_delta;
