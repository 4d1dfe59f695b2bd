//! Application-wide constants.

/// Default currency used when an account or user does not specify one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Decimal places used when presenting monetary amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of recent transactions included in the dashboard summary.
pub const DASHBOARD_RECENT_TRANSACTIONS: usize = 5;

/// Default number of trailing months covered by spending trends.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Budget alert warning threshold applied when a budget does not set its own.
pub const DEFAULT_ALERT_THRESHOLD_PCT: i32 = 80;
