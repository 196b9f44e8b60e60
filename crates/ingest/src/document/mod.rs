mod pdf;
mod txt;

pub use pdf::PdfExtractor;
pub use txt::PlainTextExtractor;

use gradebook_core::ExtractionError;

/// Turns raw submission bytes into newline-joined plain text in document order.
///
/// Failure must be reported as an error, never as an empty string.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Pick an extractor based on the file extension.
pub fn extractor_for(filename: &str) -> Result<Box<dyn TextExtractor>, ExtractionError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "pdf" => Ok(Box::new(PdfExtractor)),
        "txt" | "text" => Ok(Box::new(PlainTextExtractor)),
        other => Err(ExtractionError::UnsupportedType(other.to_string())),
    }
}

/// Extract text from file bytes based on file type.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
    let text = extractor_for(filename)?.extract(bytes)?;
    tracing::debug!(filename, chars = text.len(), "extracted submission text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_text_files() {
        let text = extract_text(b"Roll Number: 7\nQ 1\nyes", "sheet.TXT").unwrap();
        assert!(text.starts_with("Roll Number: 7"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = extract_text(b"whatever", "answers.docx").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ext) if ext == "docx"));
    }

    #[test]
    fn corrupt_pdf_is_an_error() {
        let err = extract_text(b"not a pdf at all", "submission.pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
