//! Tests for account domain models and type predicates.

#[cfg(test)]
mod tests {
    use crate::accounts::{
        account_types, is_liability_type, is_valid_account_type, AccountUpdate, NewAccount,
    };
    use rust_decimal::Decimal;

    fn valid_new_account() -> NewAccount {
        NewAccount {
            id: None,
            name: "Everyday Checking".to_string(),
            account_type: account_types::CHECKING.to_string(),
            currency: "USD".to_string(),
            balance: Decimal::ZERO,
            is_active: true,
        }
    }

    #[test]
    fn test_valid_account_types() {
        for t in [
            account_types::CHECKING,
            account_types::SAVINGS,
            account_types::CREDIT_CARD,
            account_types::CASH,
            account_types::INVESTMENT,
            account_types::OTHER,
        ] {
            assert!(is_valid_account_type(t), "{t} should be valid");
        }
        assert!(!is_valid_account_type("BROKERAGE"));
        assert!(!is_valid_account_type(""));
    }

    #[test]
    fn test_liability_type() {
        assert!(is_liability_type(account_types::CREDIT_CARD));
        assert!(!is_liability_type(account_types::SAVINGS));
    }

    #[test]
    fn test_new_account_validation() {
        assert!(valid_new_account().validate().is_ok());

        let mut no_name = valid_new_account();
        no_name.name = "  ".to_string();
        assert!(no_name.validate().is_err());

        let mut no_currency = valid_new_account();
        no_currency.currency = String::new();
        assert!(no_currency.validate().is_err());

        let mut bad_type = valid_new_account();
        bad_type.account_type = "MATTRESS".to_string();
        assert!(bad_type.validate().is_err());
    }

    #[test]
    fn test_account_update_requires_id() {
        let update = AccountUpdate {
            id: None,
            name: "Everyday Checking".to_string(),
            account_type: account_types::CHECKING.to_string(),
            is_active: true,
        };
        assert!(update.validate().is_err());

        let update = AccountUpdate {
            id: Some("acct-1".to_string()),
            ..update
        };
        assert!(update.validate().is_ok());
    }
}
