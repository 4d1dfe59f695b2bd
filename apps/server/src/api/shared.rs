//! Cross-cutting helpers shared by the resource routers.

use std::sync::Arc;

use crate::main_lib::AppState;

/// Re-evaluates budget thresholds after a spending mutation, off the
/// request path. Failures are logged, never surfaced to the caller.
pub fn trigger_budget_evaluation(state: Arc<AppState>, user_id: String) {
    tokio::spawn(async move {
        if let Err(e) = state.budget_service.evaluate_alerts(&user_id).await {
            tracing::warn!("Budget alert evaluation failed for user {}: {}", user_id, e);
        }
    });
}
