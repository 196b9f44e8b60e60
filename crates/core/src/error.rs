use thiserror::Error;

/// Failures turning submission bytes into plain text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures loading or validating an answer key.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("Unsupported answer key format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate question in answer key: {0}")]
    DuplicateQuestion(String),
}

/// Fatal errors for a single submission. No partial report is produced.
///
/// Key problems are reported as [`KeyError`] when the key is loaded, before
/// any submission is graded.
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_failures_become_grade_errors() {
        let err: GradeError = ExtractionError::Pdf("bad xref".to_string()).into();
        assert!(matches!(err, GradeError::Extraction(ExtractionError::Pdf(_))));
        assert_eq!(err.to_string(), "Text extraction failed: PDF extraction failed: bad xref");
    }
}
