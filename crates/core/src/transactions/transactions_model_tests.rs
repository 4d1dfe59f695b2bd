//! Tests for transaction domain models.

#[cfg(test)]
mod tests {
    use crate::transactions::{NewTransaction, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valid_new_transaction() -> NewTransaction {
        NewTransaction {
            id: None,
            account_id: "acct-1".to_string(),
            category_id: "cat-1".to_string(),
            transaction_type: TransactionType::Expense,
            amount: dec!(42.50),
            currency: None,
            description: Some("Groceries".to_string()),
            transaction_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            payment_method_code: None,
        }
    }

    #[test]
    fn test_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"INCOME\""
        );
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"TRANSFER\"").unwrap(),
            TransactionType::Transfer
        );
        assert!(TransactionType::parse("REFUND").is_err());
    }

    #[test]
    fn test_signed_amounts() {
        assert_eq!(TransactionType::Income.signed(dec!(10)), dec!(10));
        assert_eq!(TransactionType::Expense.signed(dec!(10)), dec!(-10));
        assert_eq!(TransactionType::Transfer.signed(dec!(10)), dec!(-10));
    }

    #[test]
    fn test_balance_delta() {
        let tx = valid_new_transaction();
        assert_eq!(tx.balance_delta(), dec!(-42.50));
    }

    #[test]
    fn test_validation_rejects_non_positive_amounts() {
        let mut tx = valid_new_transaction();
        tx.amount = dec!(0);
        assert!(tx.validate().is_err());

        tx.amount = dec!(-5);
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_validation_requires_references() {
        let mut tx = valid_new_transaction();
        tx.account_id = String::new();
        assert!(tx.validate().is_err());

        let mut tx = valid_new_transaction();
        tx.category_id = "  ".to_string();
        assert!(tx.validate().is_err());
    }
}
