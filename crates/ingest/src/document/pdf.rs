use gradebook_core::ExtractionError;

use super::TextExtractor;

/// PDF text via `pdf-extract`, pages joined with newlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        if text.trim().is_empty() {
            // Scanned/image PDFs parse fine but carry no text layer.
            tracing::warn!("PDF contains no extractable text");
            return Ok(String::new());
        }

        Ok(join_pages(&text))
    }
}

/// pdf-extract returns all text as one string with form feeds (\x0C)
/// between pages. Drop blank pages and join the rest with newlines.
fn join_pages(text: &str) -> String {
    text.split('\x0C')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
