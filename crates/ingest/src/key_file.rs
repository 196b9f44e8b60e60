//! Answer key files: a JSON array or YAML sequence of key rows.

use std::path::Path;

use gradebook_core::{AnswerKey, AnswerKeyEntry, KeyError};

/// Load and validate an answer key from `.json`, `.yaml` or `.yml`.
pub fn load_answer_key(path: &Path) -> Result<AnswerKey, KeyError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let content = std::fs::read_to_string(path)?;
    let entries = parse_entries(&content, &ext)?;
    tracing::debug!(path = %path.display(), rows = entries.len(), "loaded answer key");
    AnswerKey::new(entries)
}

fn parse_entries(content: &str, ext: &str) -> Result<Vec<AnswerKeyEntry>, KeyError> {
    match ext {
        "json" => Ok(serde_json::from_str(content)?),
        "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| KeyError::Yaml(e.to_string())),
        other => Err(KeyError::UnsupportedFormat(other.to_string())),
    }
}
