use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::login::find_user;
use crate::state::AppState;

/// Placeholder token returned on every successful login. Not a real credential.
pub const MOCK_TOKEN: &str = "fake-jwt-token-123";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// GET /login
///
/// Plain-text greeting used by the client as a connectivity check.
pub async fn handle_login_probe() -> &'static str {
    "Hello from GET /login"
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = find_user(&state.users, &req.username, &req.password)
        .ok_or(AppError::InvalidCredentials)?;

    info!("Login successful for user {}", user.id);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user_id: Some(user.id),
        token: Some(MOCK_TOKEN.to_string()),
    }))
}
