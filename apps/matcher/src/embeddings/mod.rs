/// Embedding client — the single point of entry for all external embedding
/// API calls in the matcher.
///
/// ARCHITECTURAL RULE: No other module may call the embedding API directly.
/// Scoring code depends on the [`Embedder`] trait, never on the HTTP client.
///
/// Model: text-embedding-ada-002 (hardcoded — changing it silently changes
/// every score ever returned)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
/// The model used for all embedding calls.
pub const MODEL: &str = "text-embedding-ada-002";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("embedding response contained no data")]
    EmptyData,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Backend that turns a text into its embedding vector.
///
/// Carried in `AppState` as `Arc<dyn Embedder>` so scoring paths can be
/// exercised with deterministic backends in tests.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// The OpenAI-backed embedder used in production.
///
/// One request per call: no retry loop and no client timeout. A failed call
/// surfaces as an `EmbeddingError` and is absorbed by the caller's
/// zero-score fallback.
#[derive(Clone)]
pub struct OpenAiEmbedder {
    client: Client,
    api_key: String,
}

impl OpenAiEmbedder {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request_body = EmbeddingRequest {
            model: MODEL,
            input: text,
        };

        let response = self
            .client
            .post(OPENAI_EMBEDDINGS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let row = parsed
            .data
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyData)?;

        debug!(
            "embedding call succeeded: {} dimensions",
            row.embedding.len()
        );

        Ok(row.embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embedding_response() {
        let body = r#"{
            "object": "list",
            "data": [{"object": "embedding", "index": 0, "embedding": [0.1, -0.2, 0.3]}],
            "model": "text-embedding-ada-002",
            "usage": {"prompt_tokens": 5, "total_tokens": 5}
        }"#;

        let parsed: EmbeddingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].embedding, vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn test_parse_api_error_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;

        let parsed: OpenAiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }

    #[test]
    fn test_empty_data_is_an_error() {
        let body = r#"{"object": "list", "data": [], "model": "text-embedding-ada-002"}"#;

        let parsed: EmbeddingResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data.into_iter().next().is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let request = EmbeddingRequest {
            model: MODEL,
            input: "some resume text",
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "text-embedding-ada-002",
                "input": "some resume text",
            })
        );
    }
}
