//! Join normalized answers with the answer key and total the marks.
//!
//! Outer join with explicit flags: every student answer is either scored or
//! listed as unmatched with a reason, and every key question nobody answered
//! is listed as `Unanswered`. Unmatched rows never touch `total_obtained`.

use std::collections::HashSet;

use gradebook_core::{AnswerKey, GradeReport, NormalizedAnswer, ScoredAnswer, UnmatchedQuestion, UnmatchedReason};

use crate::scorer::score_answer;

pub fn assemble(
    roll_number: String,
    subject: Option<String>,
    answers: &[NormalizedAnswer],
    key: &AnswerKey,
) -> GradeReport {
    let mut scored = Vec::new();
    let mut unmatched = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for answer in answers {
        let reason = match answer.question_number.as_deref() {
            None => UnmatchedReason::MissingLabel,
            Some(number) if seen.contains(number) => UnmatchedReason::DuplicateAnswer,
            Some(number) => match key.get(number) {
                None => UnmatchedReason::NotInKey,
                Some(question) => {
                    seen.insert(number);
                    let (similarity, awarded_marks) = score_answer(
                        &answer.answer_text,
                        &question.reference_answer,
                        question.max_marks,
                    );
                    scored.push(ScoredAnswer {
                        question_number: number.to_string(),
                        question_text: answer.question_text.clone(),
                        student_answer: answer.answer_text.clone(),
                        reference_answer: question.reference_answer.clone(),
                        similarity,
                        max_marks: question.max_marks,
                        awarded_marks,
                    });
                    continue;
                }
            },
        };

        tracing::warn!(
            question = answer.question_number.as_deref().unwrap_or("-"),
            reason = reason.as_str(),
            "answer excluded from scoring"
        );
        unmatched.push(UnmatchedQuestion {
            question_number: answer.question_number.clone(),
            question_text: answer.question_text.clone(),
            answer_text: answer.answer_text.clone(),
            reason,
        });
    }

    for question in key.questions() {
        if !seen.contains(question.question_number.as_str()) {
            unmatched.push(UnmatchedQuestion {
                question_number: Some(question.question_number.clone()),
                question_text: String::new(),
                answer_text: String::new(),
                reason: UnmatchedReason::Unanswered,
            });
        }
    }

    let total_obtained = scored.iter().map(|s| s.awarded_marks).sum();

    GradeReport {
        roll_number,
        subject,
        scored,
        unmatched,
        defaulted_keys: key.defaulted(),
        total_obtained,
        total_possible: key.total_possible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::AnswerKeyEntry;

    fn answer(number: Option<&str>, text: &str) -> NormalizedAnswer {
        NormalizedAnswer {
            question_number: number.map(str::to_string),
            question_text: String::new(),
            answer_text: text.to_string(),
        }
    }

    fn key() -> AnswerKey {
        AnswerKey::new(vec![
            AnswerKeyEntry::new("Q1", "Paris", 10.0),
            AnswerKeyEntry::new("Q2", "Berlin", 10.0),
        ])
        .unwrap()
    }

    fn report(answers: &[NormalizedAnswer]) -> GradeReport {
        assemble("1".to_string(), None, answers, &key())
    }

    #[test]
    fn scores_matched_answers() {
        let r = report(&[answer(Some("Q1"), "Paris"), answer(Some("Q2"), "Canberra")]);
        assert_eq!(r.scored.len(), 2);
        assert_eq!(r.scored[0].awarded_marks, 10.0);
        assert_eq!(r.scored[1].awarded_marks, 0.0);
        assert_eq!(r.total_obtained, 10.0);
        assert_eq!(r.total_possible, 20.0);
        assert!(r.unmatched.is_empty());
    }

    #[test]
    fn flags_answers_missing_from_key() {
        let r = report(&[answer(Some("Q1"), "Paris"), answer(Some("Q3"), "Paris")]);
        assert_eq!(r.scored.len(), 1);
        assert_eq!(r.total_obtained, 10.0);
        assert_eq!(r.total_possible, 20.0);
        let not_in_key: Vec<_> = r.unmatched_by(UnmatchedReason::NotInKey).collect();
        assert_eq!(not_in_key.len(), 1);
        assert_eq!(not_in_key[0].question_number.as_deref(), Some("Q3"));
    }

    #[test]
    fn flags_unanswered_key_questions() {
        let r = report(&[answer(Some("Q2"), "Berlin")]);
        assert_eq!(r.total_obtained, 10.0);
        let unanswered: Vec<_> = r.unmatched_by(UnmatchedReason::Unanswered).collect();
        assert_eq!(unanswered.len(), 1);
        assert_eq!(unanswered[0].question_number.as_deref(), Some("Q1"));
    }

    #[test]
    fn only_first_duplicate_is_scored() {
        let r = report(&[answer(Some("Q1"), "Paris"), answer(Some("Q1"), "Paris")]);
        assert_eq!(r.scored.len(), 1);
        assert_eq!(r.total_obtained, 10.0);
        assert_eq!(r.unmatched_by(UnmatchedReason::DuplicateAnswer).count(), 1);
    }

    #[test]
    fn unlabeled_answers_are_flagged() {
        let r = report(&[answer(None, "Paris")]);
        assert!(r.scored.is_empty());
        assert_eq!(r.unmatched_by(UnmatchedReason::MissingLabel).count(), 1);
        assert_eq!(r.unmatched_by(UnmatchedReason::Unanswered).count(), 2);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let r = report(&[]);
        assert!(r.scored.is_empty());
        assert_eq!(r.total_obtained, 0.0);
        assert_eq!(r.total_possible, 20.0);
    }

    #[test]
    fn defaulted_key_rows_are_reported() {
        let key = AnswerKey::new(vec![AnswerKeyEntry {
            question_number: "Q1".to_string(),
            reference_answer: "Paris".to_string(),
            max_marks: None,
        }])
        .unwrap();
        let r = assemble("1".to_string(), None, &[answer(Some("Q1"), "Paris")], &key);
        assert_eq!(r.scored[0].similarity, 100.0);
        assert_eq!(r.scored[0].awarded_marks, 0.0);
        assert_eq!(r.defaulted_keys, vec!["Q1"]);
        assert_eq!(r.total_possible, 0.0);
    }
}
