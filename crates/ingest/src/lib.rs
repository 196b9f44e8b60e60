//! Boundary between raw submission files and the grading core.
//!
//! - `document`: turn submission bytes into plain text (PDF or text files)
//! - `key_file`: load answer keys from JSON or YAML files

pub mod document;
pub mod key_file;

pub use document::{extract_text, extractor_for, PdfExtractor, PlainTextExtractor, TextExtractor};
pub use key_file::load_answer_key;
