//! HTTP routing. Everything hangs under `/api/v1`.

pub mod accounts;
pub mod analytics;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod loans;
pub mod notifications;
pub mod payment_methods;
pub mod recurring;
pub mod shared;
pub mod transactions;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin = config
            .cors_origin
            .parse::<HeaderValue>()
            .unwrap_or_else(|_| HeaderValue::from_static("http://localhost"));
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(accounts::router())
        .merge(categories::router())
        .merge(transactions::router())
        .merge(recurring::router())
        .merge(budgets::router())
        .merge(loans::router())
        .merge(notifications::router())
        .merge(payment_methods::router())
        .merge(analytics::router())
        .with_state(state);

    Router::new().nest("/api/v1", api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(30)))
            .layer(cors_layer(config)),
    )
}
