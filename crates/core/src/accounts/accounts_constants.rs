/// Default account type for new accounts
pub const DEFAULT_ACCOUNT_TYPE: &str = "CHECKING";

/// Account type constants
pub mod account_types {
    pub const CHECKING: &str = "CHECKING";
    pub const SAVINGS: &str = "SAVINGS";
    pub const CREDIT_CARD: &str = "CREDIT_CARD";
    pub const CASH: &str = "CASH";
    pub const INVESTMENT: &str = "INVESTMENT";
    pub const OTHER: &str = "OTHER";
}

/// Returns true if the given account type is valid.
pub fn is_valid_account_type(account_type: &str) -> bool {
    matches!(
        account_type,
        account_types::CHECKING
            | account_types::SAVINGS
            | account_types::CREDIT_CARD
            | account_types::CASH
            | account_types::INVESTMENT
            | account_types::OTHER
    )
}

/// Returns true if the account type represents a liability balance.
///
/// Liability balances are shown as owed amounts and subtracted from
/// net totals on the dashboard.
pub fn is_liability_type(account_type: &str) -> bool {
    account_type == account_types::CREDIT_CARD
}
