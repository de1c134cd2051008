pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers::handle_match;
use crate::resume::handlers::handle_parse_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/match", post(handle_match))
        .route("/parse-resume", post(handle_parse_resume))
        .with_state(state)
}
