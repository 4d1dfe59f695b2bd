//! Tests for analytics aggregation helpers.

#[cfg(test)]
mod tests {
    use crate::analytics::{compute_breakdown, compute_trends};
    use crate::transactions::{Transaction, TransactionType};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn tx(
        category: &str,
        tx_type: TransactionType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Transaction {
        let ts = NaiveDateTime::default();
        Transaction {
            id: format!("tx-{category}-{date}"),
            user_id: "user-1".to_string(),
            account_id: "acct-1".to_string(),
            category_id: category.to_string(),
            transaction_type: tx_type,
            amount,
            currency: "USD".to_string(),
            description: None,
            transaction_date: date,
            payment_method_code: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_trends_zero_fill_and_order() {
        let txs = vec![
            tx("food", TransactionType::Expense, dec!(100), d(2026, 3, 10)),
            tx("salary", TransactionType::Income, dec!(3000), d(2026, 3, 1)),
            tx("food", TransactionType::Expense, dec!(80), d(2026, 1, 20)),
        ];
        let points = compute_trends(&txs, 3, d(2026, 3, 15));
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].month, d(2026, 1, 1));
        assert_eq!(points[0].expenses, dec!(80));
        // February had nothing: zero-filled, not skipped.
        assert_eq!(points[1].month, d(2026, 2, 1));
        assert_eq!(points[1].income, Decimal::ZERO);
        assert_eq!(points[1].expenses, Decimal::ZERO);
        assert_eq!(points[2].income, dec!(3000));
        assert_eq!(points[2].expenses, dec!(100));
    }

    #[test]
    fn test_trends_ignore_out_of_window_and_transfers() {
        let txs = vec![
            tx("old", TransactionType::Expense, dec!(999), d(2025, 6, 1)),
            tx("move", TransactionType::Transfer, dec!(500), d(2026, 3, 2)),
        ];
        let points = compute_trends(&txs, 2, d(2026, 3, 15));
        assert!(points.iter().all(|p| p.income.is_zero() && p.expenses.is_zero()));
    }

    #[test]
    fn test_breakdown_shares() {
        let txs = vec![
            tx("food", TransactionType::Expense, dec!(300), d(2026, 3, 1)),
            tx("rent", TransactionType::Expense, dec!(700), d(2026, 3, 2)),
            tx("salary", TransactionType::Income, dec!(5000), d(2026, 3, 3)),
        ];
        let entries = compute_breakdown(&txs, TransactionType::Expense);
        assert_eq!(entries.len(), 2);
        // Largest first
        assert_eq!(entries[0].category_id, "rent");
        assert_eq!(entries[0].total, dec!(700));
        assert_eq!(entries[0].percent, dec!(70.00));
        assert_eq!(entries[1].percent, dec!(30.00));
    }

    #[test]
    fn test_breakdown_empty() {
        let entries = compute_breakdown(&[], TransactionType::Expense);
        assert!(entries.is_empty());
    }
}
