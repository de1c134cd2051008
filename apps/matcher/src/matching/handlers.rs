use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::{calculate_match_score, SHOW_THRESHOLD};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub student_cv: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_score: f64,
    pub should_show: bool,
}

impl MatchResponse {
    pub fn from_score(match_score: f64) -> Self {
        Self {
            match_score,
            should_show: match_score >= SHOW_THRESHOLD,
        }
    }
}

/// POST /match
///
/// Scores a CV against a job description. Both fields are required and must
/// be non-empty; an absent field deserializes to the empty string and is
/// rejected the same way.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if req.student_cv.is_empty() || req.job_description.is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let match_score =
        calculate_match_score(state.embedder.as_ref(), &req.student_cv, &req.job_description)
            .await;

    Ok(Json(MatchResponse::from_score(match_score)))
}
