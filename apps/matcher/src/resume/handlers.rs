use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::{extract_text, validate_filename, UPLOAD_FIELD};

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub text: String,
    pub message: String,
}

/// POST /parse-resume
///
/// Accepts a multipart upload with the PDF under the `resume` field.
/// Validation order: field present, filename non-empty, filename ends in
/// `.pdf`, then extraction.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?;

        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    validate_filename(&filename)?;

    let text = extract_text(&bytes)?;
    info!(
        "Parsed {} uploaded bytes into {} characters of text",
        bytes.len(),
        text.len()
    );

    Ok(Json(ParseResumeResponse {
        text,
        message: "PDF parsed successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_payload_shape() {
        let response = ParseResumeResponse {
            text: "page one textpage two text".to_string(),
            message: "PDF parsed successfully".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "page one textpage two text",
                "message": "PDF parsed successfully",
            })
        );
    }
}
