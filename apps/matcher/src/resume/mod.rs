//! Resume parsing — plain-text extraction from uploaded PDF files.

pub mod handlers;

use crate::errors::AppError;

/// Multipart field name the client uploads the file under.
pub const UPLOAD_FIELD: &str = "resume";

/// Rejects uploads whose filename does not look like a PDF. Content is not
/// sniffed; a valid PDF under the wrong name is still rejected.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !filename.ends_with(".pdf") {
        return Err(AppError::Validation("Invalid file format".to_string()));
    }
    Ok(())
}

/// Extracts the text of every page, concatenated in page order with no
/// added separators.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_filename_is_accepted() {
        assert!(validate_filename("resume.pdf").is_ok());
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        let err = validate_filename("").unwrap_err();
        assert_eq!(err.to_string(), "No file selected");
    }

    #[test]
    fn test_non_pdf_extension_is_rejected() {
        let err = validate_filename("resume.docx").unwrap_err();
        assert_eq!(err.to_string(), "Invalid file format");
    }

    #[test]
    fn test_pdf_extension_must_be_last() {
        assert!(validate_filename("resume.pdf.zip").is_err());
    }

    #[test]
    fn test_extension_check_is_case_sensitive() {
        // Matches the upstream contract: only a literal ".pdf" suffix passes.
        assert!(validate_filename("RESUME.PDF").is_err());
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)));
    }
}
