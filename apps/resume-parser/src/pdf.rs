//! Upload checks and PDF-to-text conversion via `pdf-extract`.

use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Rejects empty, oversized and non-PDF uploads.
pub fn validate_upload(bytes: &[u8], max_bytes: usize) -> Result<(), AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation(
            "Invalid PDF file: file appears to be empty".to_string(),
        ));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "File size must be less than {}",
            human_size(max_bytes)
        )));
    }
    if !is_pdf(bytes) {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    Ok(())
}

pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(PDF_MAGIC)
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

/// Extracts plain text from PDF bytes on the blocking pool; decoding is
/// CPU-bound and `pdf-extract` may panic on malformed files.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| AppError::PdfExtraction(format!("PDF decoder aborted: {e}")))?
    .map_err(AppError::PdfExtraction)?;

    debug!(bytes = size, chars = text.len(), "extracted PDF text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 10 * 1024 * 1024;

    #[test]
    fn test_empty_upload_rejected() {
        let err = validate_upload(b"", LIMIT).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("empty")));
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let bytes = b"%PDF-1.7 padding".to_vec();
        let err = validate_upload(&bytes, 8).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("8 bytes")));
    }

    #[test]
    fn test_size_limit_message_in_megabytes() {
        assert_eq!(human_size(LIMIT), "10MB");
    }

    #[test]
    fn test_non_pdf_rejected() {
        let err = validate_upload(b"PK\x03\x04 docx archive", LIMIT).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Only PDF")));
    }

    #[test]
    fn test_pdf_header_accepted() {
        assert!(validate_upload(b"%PDF-1.4\n%...", LIMIT).is_ok());
    }

    #[tokio::test]
    async fn test_garbage_pdf_fails_extraction() {
        let result = extract_text(b"%PDF-1.4 this is not a real document".to_vec()).await;
        assert!(matches!(result, Err(AppError::PdfExtraction(_))));
    }
}
