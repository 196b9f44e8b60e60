use gradebook_core::ExtractionError;

use super::TextExtractor;

/// Already-extracted text submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // Try UTF-8 first, fall back to lossy conversion
        let text = String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
        Ok(text.replace("\r\n", "\n"))
    }
}
