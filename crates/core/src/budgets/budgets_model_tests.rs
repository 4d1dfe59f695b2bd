//! Tests for budget period windows and validation.

#[cfg(test)]
mod tests {
    use crate::budgets::{current_period_window, BudgetPeriod, NewBudget};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_weekly_window_anchors_monday() {
        // 2026-03-18 is a Wednesday
        let (start, end) = current_period_window(BudgetPeriod::Weekly, d(2026, 3, 18));
        assert_eq!(start, d(2026, 3, 16));
        assert_eq!(end, d(2026, 3, 22));

        // A Monday is its own period start
        let (start, _) = current_period_window(BudgetPeriod::Weekly, d(2026, 3, 16));
        assert_eq!(start, d(2026, 3, 16));
    }

    #[test]
    fn test_monthly_window() {
        let (start, end) = current_period_window(BudgetPeriod::Monthly, d(2026, 2, 14));
        assert_eq!(start, d(2026, 2, 1));
        assert_eq!(end, d(2026, 2, 28));

        let (start, end) = current_period_window(BudgetPeriod::Monthly, d(2026, 12, 31));
        assert_eq!(start, d(2026, 12, 1));
        assert_eq!(end, d(2026, 12, 31));
    }

    #[test]
    fn test_yearly_window() {
        let (start, end) = current_period_window(BudgetPeriod::Yearly, d(2026, 7, 4));
        assert_eq!(start, d(2026, 1, 1));
        assert_eq!(end, d(2026, 12, 31));
    }

    #[test]
    fn test_new_budget_validation() {
        let budget = NewBudget {
            id: None,
            category_id: "cat-1".to_string(),
            amount: dec!(500),
            period: BudgetPeriod::Monthly,
            start_date: d(2026, 1, 1),
            alert_threshold_pct: 80,
        };
        assert!(budget.validate().is_ok());

        let zero = NewBudget {
            amount: dec!(0),
            ..budget.clone()
        };
        assert!(zero.validate().is_err());

        let bad_threshold = NewBudget {
            alert_threshold_pct: 0,
            ..budget.clone()
        };
        assert!(bad_threshold.validate().is_err());

        let over_threshold = NewBudget {
            alert_threshold_pct: 150,
            ..budget
        };
        assert!(over_threshold.validate().is_err());
    }
}
