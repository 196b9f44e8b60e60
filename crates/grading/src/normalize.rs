//! Question label and answer prefix normalization.

use gradebook_core::{AnswerRecord, NormalizedAnswer};
use once_cell::sync::Lazy;
use regex::Regex;

static QUESTION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Q\s*\d+").expect("valid question number pattern"));

const ANSWER_PREFIX: &str = "Answer: ";

/// Split a raw label into `(question_number, question_text)`.
///
/// `"Q 7 Explain photosynthesis"` becomes `(Some("Q7"), "Explain photosynthesis")`.
/// A label without a number is returned unchanged with no question number.
pub fn parse_question_label(label: &str) -> (Option<String>, String) {
    match QUESTION_NUMBER.find(label) {
        Some(m) => {
            let number: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            let text = format!("{}{}", &label[..m.start()], &label[m.end()..]);
            (Some(number), text.trim().to_string())
        }
        None => (None, label.to_string()),
    }
}

/// Remove one leading `"Answer: "` marker and trim; otherwise return as is.
pub fn strip_answer_prefix(text: &str) -> String {
    match text.strip_prefix(ANSWER_PREFIX) {
        Some(rest) => rest.trim().to_string(),
        None => text.to_string(),
    }
}

/// Normalize every record, one output per input.
pub fn normalize(records: &[AnswerRecord]) -> Vec<NormalizedAnswer> {
    records
        .iter()
        .map(|record| {
            let (question_number, question_text) = parse_question_label(&record.question_label);
            if question_number.is_none() {
                tracing::debug!(label = %record.question_label, "label has no question number");
            }
            NormalizedAnswer {
                question_number,
                question_text,
                answer_text: strip_answer_prefix(&record.raw_answer_text),
            }
        })
        .collect()
}
