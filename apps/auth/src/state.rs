use std::sync::Arc;

use crate::models::user::MockUser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fixed user list, seeded once at startup and never written afterwards.
    pub users: Arc<[MockUser]>,
}
