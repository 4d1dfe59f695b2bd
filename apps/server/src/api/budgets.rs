use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use finfusion_core::budgets::{Budget, BudgetAlert, BudgetProgress, BudgetUpdate, NewBudget};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    #[serde(default)]
    active_only: bool,
}

async fn list_budgets(
    user: AuthUser,
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state
        .budget_service
        .list_budgets(&user.user_id, query.active_only)?;
    Ok(Json(budgets))
}

async fn get_budget(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.get_budget(&user.user_id, &id)?;
    Ok(Json(budget))
}

async fn create_budget(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(budget): Json<NewBudget>,
) -> ApiResult<Json<Budget>> {
    let b = state
        .budget_service
        .create_budget(&user.user_id, budget)
        .await?;
    Ok(Json(b))
}

async fn update_budget(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut update): Json<BudgetUpdate>,
) -> ApiResult<Json<Budget>> {
    update.id = Some(id);
    let b = state
        .budget_service
        .update_budget(&user.user_id, update)
        .await?;
    Ok(Json(b))
}

async fn delete_budget(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .budget_service
        .delete_budget(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn all_progress(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetProgress>>> {
    let progress = state.budget_service.get_all_progress(&user.user_id)?;
    Ok(Json(progress))
}

async fn budget_progress(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BudgetProgress>> {
    let progress = state.budget_service.get_progress(&user.user_id, &id)?;
    Ok(Json(progress))
}

async fn budget_alerts(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetAlert>>> {
    let alerts = state.budget_service.list_alerts(&user.user_id, &id)?;
    Ok(Json(alerts))
}

/// Runs a threshold evaluation pass and returns the alerts it created.
async fn evaluate_alerts(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetAlert>>> {
    let created = state.budget_service.evaluate_alerts(&user.user_id).await?;
    Ok(Json(created))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/progress", get(all_progress))
        .route("/budgets/evaluate", post(evaluate_alerts))
        .route(
            "/budgets/{id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
        .route("/budgets/{id}/progress", get(budget_progress))
        .route("/budgets/{id}/alerts", get(budget_alerts))
}
