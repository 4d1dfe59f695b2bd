//! Analytics result models and pure aggregation helpers.
//!
//! Aggregation runs over repository-loaded transactions so the domain
//! stays free of SQL; the helpers here are pure and unit-testable.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::transactions::{Transaction, TransactionType};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of active asset-account balances minus liability balances.
    pub total_balance: Decimal,
    pub month_income: Decimal,
    pub month_expenses: Decimal,
    pub month_net: Decimal,
    pub active_budgets: usize,
    pub unread_notifications: i64,
    pub recent_transactions: Vec<Transaction>,
}

/// One month of the spending trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// First day of the month this point covers.
    pub month: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// One category's share of spending within a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownEntry {
    pub category_id: String,
    pub total: Decimal,
    /// Share of the overall total, in percent, rounded to 2 places.
    pub percent: Decimal,
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn previous_month_start(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    if start.month() == 1 {
        NaiveDate::from_ymd_opt(start.year() - 1, 12, 1).unwrap_or(start)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() - 1, 1).unwrap_or(start)
    }
}

/// Buckets transactions into per-month income/expense sums for the
/// trailing `months` months ending at `today`'s month. Months with no
/// transactions are zero-filled.
pub fn compute_trends(
    transactions: &[Transaction],
    months: u32,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    let mut starts = Vec::with_capacity(months as usize);
    let mut cursor = month_start(today);
    for _ in 0..months {
        starts.push(cursor);
        cursor = previous_month_start(cursor);
    }
    starts.reverse();

    let mut buckets: BTreeMap<NaiveDate, (Decimal, Decimal)> =
        starts.iter().map(|s| (*s, (Decimal::ZERO, Decimal::ZERO))).collect();

    for tx in transactions {
        let key = month_start(tx.transaction_date);
        if let Some((income, expenses)) = buckets.get_mut(&key) {
            match tx.transaction_type {
                TransactionType::Income => *income += tx.amount,
                TransactionType::Expense => *expenses += tx.amount,
                TransactionType::Transfer => {}
            }
        }
    }

    starts
        .into_iter()
        .map(|month| {
            let (income, expenses) = buckets[&month];
            TrendPoint {
                month,
                income,
                expenses,
            }
        })
        .collect()
}

/// Sums transactions of one type per category and computes percentage
/// shares. Entries are sorted by total, largest first.
pub fn compute_breakdown(
    transactions: &[Transaction],
    breakdown_type: TransactionType,
) -> Vec<CategoryBreakdownEntry> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for tx in transactions {
        if tx.transaction_type == breakdown_type {
            *totals.entry(tx.category_id.as_str()).or_default() += tx.amount;
        }
    }

    let grand_total: Decimal = totals.values().copied().sum();
    let mut entries: Vec<CategoryBreakdownEntry> = totals
        .into_iter()
        .map(|(category_id, total)| {
            let percent = if grand_total > Decimal::ZERO {
                (total / grand_total * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };
            CategoryBreakdownEntry {
                category_id: category_id.to_string(),
                total,
                percent,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total.cmp(&a.total));
    entries
}
