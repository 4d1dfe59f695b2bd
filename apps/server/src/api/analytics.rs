use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use finfusion_core::analytics::{CategoryBreakdownEntry, DashboardSummary, TrendPoint};
use finfusion_core::transactions::TransactionType;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrendsQuery {
    months: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BreakdownQuery {
    breakdown_type: Option<TransactionType>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

async fn dashboard(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.analytics_service.dashboard_summary(&user.user_id)?;
    Ok(Json(summary))
}

async fn trends(
    user: AuthUser,
    Query(query): Query<TrendsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TrendPoint>>> {
    let points = state
        .analytics_service
        .spending_trends(&user.user_id, query.months)?;
    Ok(Json(points))
}

async fn breakdown(
    user: AuthUser,
    Query(query): Query<BreakdownQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryBreakdownEntry>>> {
    // Defaults to the current month of expenses.
    let today = Utc::now().date_naive();
    let from = query
        .from
        .unwrap_or_else(|| today.with_day(1).unwrap_or(today));
    let to = query.to.unwrap_or(today);
    let breakdown_type = query.breakdown_type.unwrap_or(TransactionType::Expense);

    let entries = state.analytics_service.category_breakdown(
        &user.user_id,
        breakdown_type,
        from,
        to,
    )?;
    Ok(Json(entries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/dashboard", get(dashboard))
        .route("/analytics/trends", get(trends))
        .route("/analytics/breakdown", get(breakdown))
}
