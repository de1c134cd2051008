use std::sync::Arc;

use crate::embeddings::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Embedding backend. Production wires `OpenAiEmbedder`; tests substitute
    /// deterministic stubs.
    pub embedder: Arc<dyn Embedder>,
}
