//! Match scoring — embeds a CV and a job description, then scores the pair
//! by cosine similarity expressed as a 0–100 percentage.

pub mod handlers;

use tracing::error;

use crate::embeddings::{Embedder, EmbeddingError};

/// Matches scoring at or above this percentage are worth surfacing to the
/// client. The boundary is inclusive.
pub const SHOW_THRESHOLD: f64 = 70.0;

/// Cosine similarity between two vectors, in [-1, 1].
/// A zero-magnitude input scores 0 rather than dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|y| (*y as f64).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Computes the 0–100 match percentage between a CV and a job description,
/// rounded to two decimal places.
///
/// Embedding failures never escape this function: the error is logged and
/// the score degrades to 0.
pub async fn calculate_match_score(
    embedder: &dyn Embedder,
    student_cv: &str,
    job_description: &str,
) -> f64 {
    match try_match_score(embedder, student_cv, job_description).await {
        Ok(score) => score,
        Err(e) => {
            error!("Error calculating match score: {e}");
            0.0
        }
    }
}

async fn try_match_score(
    embedder: &dyn Embedder,
    student_cv: &str,
    job_description: &str,
) -> Result<f64, EmbeddingError> {
    let cv_embedding = embedder.embed(student_cv).await?;
    let job_embedding = embedder.embed(job_description).await?;

    let similarity = cosine_similarity(&cv_embedding, &job_embedding);

    Ok(round_two_places(similarity * 100.0))
}

/// Rounds a percentage to two decimal places.
fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
