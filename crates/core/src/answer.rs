use serde::{Deserialize, Serialize};

/// One segmented unit from a submission, before label normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Label line as it appeared in the document, e.g. `"Q 3 Define osmosis"`.
    pub question_label: String,
    /// Lines following the label, space-joined and trimmed.
    pub raw_answer_text: String,
}

/// An answer with its label split into a question number and question text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAnswer {
    /// Canonical number such as `"Q3"`. `None` when the label carries no number,
    /// in which case the answer can never be joined to a key entry.
    pub question_number: Option<String>,
    /// Remainder of the label after the number is removed (may be empty).
    pub question_text: String,
    /// Answer body with any leading `"Answer: "` marker removed.
    pub answer_text: String,
}
