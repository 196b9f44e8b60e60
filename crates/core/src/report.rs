use serde::{Deserialize, Serialize};

/// A student answer joined with its key entry and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_number: String,
    pub question_text: String,
    pub student_answer: String,
    pub reference_answer: String,
    /// Similarity in `0..=100`.
    pub similarity: f64,
    pub max_marks: f64,
    /// Always one of `0`, `0.5 * max_marks`, `0.75 * max_marks`, `max_marks`.
    pub awarded_marks: f64,
}

/// Why a question took no part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedReason {
    /// The student answered a question number the key does not contain.
    NotInKey,
    /// The label carried no question number.
    MissingLabel,
    /// A later answer for a question number already scored.
    DuplicateAnswer,
    /// A key question the student did not answer.
    Unanswered,
}

impl UnmatchedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnmatchedReason::NotInKey => "not_in_key",
            UnmatchedReason::MissingLabel => "missing_label",
            UnmatchedReason::DuplicateAnswer => "duplicate_answer",
            UnmatchedReason::Unanswered => "unanswered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedQuestion {
    pub question_number: Option<String>,
    pub question_text: String,
    pub answer_text: String,
    pub reason: UnmatchedReason,
}

/// Graded result for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub roll_number: String,
    pub subject: Option<String>,
    pub scored: Vec<ScoredAnswer>,
    pub unmatched: Vec<UnmatchedQuestion>,
    /// Key questions whose marks were missing or invalid and counted as 0.
    pub defaulted_keys: Vec<String>,
    pub total_obtained: f64,
    pub total_possible: f64,
}

impl GradeReport {
    /// Obtained over possible as a percentage; 0 for an empty key.
    pub fn percentage(&self) -> f64 {
        if self.total_possible > 0.0 {
            self.total_obtained / self.total_possible * 100.0
        } else {
            0.0
        }
    }

    /// Unmatched rows for a given reason.
    pub fn unmatched_by(&self, reason: UnmatchedReason) -> impl Iterator<Item = &UnmatchedQuestion> {
        self.unmatched.iter().filter(move |u| u.reason == reason)
    }
}
