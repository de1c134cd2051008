pub mod health;

use axum::{routing::get, Router};

use crate::login::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/login",
            get(handlers::handle_login_probe).post(handlers::handle_login),
        )
        .with_state(state)
}
