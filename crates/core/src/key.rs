//! Answer key model: raw rows as supplied by the caller, and the validated
//! table the grader joins against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::KeyError;

/// One row of an answer key as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerKeyEntry {
    pub question_number: String,
    #[serde(alias = "answer")]
    pub reference_answer: String,
    /// Missing marks make the row malformed; it then counts as zero.
    #[serde(default, alias = "marks")]
    pub max_marks: Option<f64>,
}

impl AnswerKeyEntry {
    pub fn new(question_number: &str, reference_answer: &str, max_marks: f64) -> Self {
        Self {
            question_number: question_number.to_string(),
            reference_answer: reference_answer.to_string(),
            max_marks: Some(max_marks),
        }
    }
}

/// A key row with its effective marks resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyQuestion {
    pub question_number: String,
    pub reference_answer: String,
    pub max_marks: f64,
    /// True when `max_marks` was missing or invalid and defaulted to 0.
    pub defaulted: bool,
}

/// Validated answer key, indexed by question number, in supplied order.
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    questions: Vec<KeyQuestion>,
    index: HashMap<String, usize>,
}

impl AnswerKey {
    /// Build a key from raw rows.
    ///
    /// Question numbers are trimmed of surrounding whitespace (spreadsheet
    /// exports often pad cells); lookups through [`AnswerKey::get`] are then
    /// exact. Rows with missing, negative or non-finite marks are kept with
    /// `max_marks = 0`. Duplicate question numbers, compared after trimming,
    /// are rejected.
    pub fn new(entries: Vec<AnswerKeyEntry>) -> Result<Self, KeyError> {
        let mut questions = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            let question_number = entry.question_number.trim().to_string();
            if index.contains_key(&question_number) {
                return Err(KeyError::DuplicateQuestion(question_number));
            }

            let (max_marks, defaulted) = match entry.max_marks {
                Some(m) if m.is_finite() && m >= 0.0 => (m, false),
                other => {
                    tracing::warn!(
                        question = %question_number,
                        marks = ?other,
                        "answer key row has no usable marks, counting it as 0"
                    );
                    (0.0, true)
                }
            };

            index.insert(question_number.clone(), questions.len());
            questions.push(KeyQuestion {
                question_number,
                reference_answer: entry.reference_answer,
                max_marks,
                defaulted,
            });
        }

        Ok(Self { questions, index })
    }

    pub fn get(&self, question_number: &str) -> Option<&KeyQuestion> {
        self.index.get(question_number).map(|&i| &self.questions[i])
    }

    pub fn questions(&self) -> &[KeyQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Sum of effective max marks over the whole key.
    pub fn total_possible(&self) -> f64 {
        self.questions.iter().map(|q| q.max_marks).sum()
    }

    /// Question numbers whose marks were defaulted to 0.
    pub fn defaulted(&self) -> Vec<String> {
        self.questions
            .iter()
            .filter(|q| q.defaulted)
            .map(|q| q.question_number.clone())
            .collect()
    }
}
