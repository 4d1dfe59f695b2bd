use std::sync::Arc;

use axum::{extract::State, routing::{get, post}, Json, Router};
use finfusion_core::constants::DEFAULT_CURRENCY;
use finfusion_core::users::{NewUser, UserUpdate};

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

const MIN_PASSWORD_LEN: usize = 8;

async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let password_hash = hash_password(&req.password)?;
    let email = req.email.trim().to_ascii_lowercase();
    let user = state
        .user_service
        .register(NewUser {
            id: None,
            email,
            name: req.name,
            password_hash,
            base_currency: req
                .base_currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
        .await?;

    let access_token = state.auth.issue_token(&user.id)?;
    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.token_ttl_secs(),
        user: UserResponse::from(user),
    }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = req.email.trim().to_ascii_lowercase();
    let user = state
        .user_service
        .find_by_email(&email)?
        .filter(|u| verify_password(&req.password, &u.password_hash))
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let access_token = state.auth.issue_token(&user.id)?;
    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.token_ttl_secs(),
        user: UserResponse::from(user),
    }))
}

async fn me(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserResponse>> {
    let u = state.user_service.get_user(&user.user_id)?;
    Ok(Json(UserResponse::from(u)))
}

async fn update_me(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<UserUpdate>,
) -> ApiResult<Json<UserResponse>> {
    let u = state
        .user_service
        .update_profile(&user.user_id, update)
        .await?;
    Ok(Json(UserResponse::from(u)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me).put(update_me))
}
