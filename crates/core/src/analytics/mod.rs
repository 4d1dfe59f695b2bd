//! Analytics module - dashboard summary, spending trends, and category
//! breakdowns aggregated from transaction history.

mod analytics_model;
#[cfg(test)]
mod analytics_model_tests;
mod analytics_service;

pub use analytics_model::{
    compute_breakdown, compute_trends, CategoryBreakdownEntry, DashboardSummary, TrendPoint,
};
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};
