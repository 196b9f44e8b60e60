//! Whole-pipeline scenarios over extracted submission text.

use gradebook_core::{AnswerKey, AnswerKeyEntry, UnmatchedReason};
use gradebook_grading::{grade_text, write_delimited};

fn capitals_key() -> AnswerKey {
    AnswerKey::new(vec![
        AnswerKeyEntry::new("Q1", "Paris", 10.0),
        AnswerKeyEntry::new("Q2", "Berlin", 10.0),
    ])
    .unwrap()
}

#[test]
fn capitals_submission() {
    let text = "Roll Number: 1023\nQ 1\nAnswer: Paris\nQ 2\nAnswer: Canberra\n";
    let report = grade_text(text, &capitals_key());

    assert_eq!(report.roll_number, "1023");
    assert_eq!(report.scored.len(), 2);

    let q1 = &report.scored[0];
    assert_eq!(q1.question_number, "Q1");
    assert_eq!(q1.student_answer, "Paris");
    assert_eq!(q1.similarity, 100.0);
    assert_eq!(q1.awarded_marks, 10.0);

    let q2 = &report.scored[1];
    assert_eq!(q2.question_number, "Q2");
    assert!(q2.similarity < 50.0);
    assert_eq!(q2.awarded_marks, 0.0);

    assert_eq!(report.total_obtained, 10.0);
    assert_eq!(report.total_possible, 20.0);
    assert!(report.unmatched.is_empty());
}

#[test]
fn answer_outside_key_is_flagged_not_scored() {
    let text = "Roll Number: 8\nQ 1\nAnswer: Paris\nQ 3\nAnswer: Rome\n";
    let report = grade_text(text, &capitals_key());

    assert_eq!(report.total_obtained, 10.0);
    assert_eq!(report.total_possible, 20.0);
    assert!(report.scored.iter().all(|s| s.question_number != "Q3"));

    let flagged: Vec<_> = report.unmatched_by(UnmatchedReason::NotInKey).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].question_number.as_deref(), Some("Q3"));
    assert_eq!(flagged[0].answer_text, "Rome");
    assert_eq!(report.unmatched_by(UnmatchedReason::Unanswered).count(), 1);
}

#[test]
fn submission_without_questions() {
    let report = grade_text("Subject: Geography\nNo answers were written.", &capitals_key());
    assert_eq!(report.roll_number, "Unknown");
    assert_eq!(report.subject.as_deref(), Some("Geography"));
    assert!(report.scored.is_empty());
    assert_eq!(report.total_obtained, 0.0);
    assert_eq!(report.total_possible, 20.0);
}

#[test]
fn question_text_and_partial_credit() {
    let key = AnswerKey::new(vec![AnswerKeyEntry::new(
        "Q7",
        "Plants convert light into chemical energy",
        4.0,
    )])
    .unwrap();
    let text = "Q 7 Explain photosynthesis\nAnswer: Plants convert light\ninto chemical energy.";
    let report = grade_text(text, &key);

    let row = &report.scored[0];
    assert_eq!(row.question_text, "Explain photosynthesis");
    assert_eq!(row.student_answer, "Plants convert light into chemical energy.");
    assert!(row.similarity >= 90.0);
    assert_eq!(row.awarded_marks, 4.0);
}

#[test]
fn totals_never_exceed_possible() {
    let text = "Q 1\nParis\nQ 1\nParis\nQ 2\nBerlin\nQ 2\nBerlin\n";
    let report = grade_text(text, &capitals_key());
    assert_eq!(report.total_obtained, 20.0);
    assert!(report.total_obtained <= report.total_possible);
    assert_eq!(report.unmatched_by(UnmatchedReason::DuplicateAnswer).count(), 2);
}

#[test]
fn exported_table_has_one_row_per_question() {
    let text = "Roll Number: 1023\nQ 1\nAnswer: Paris\nQ 2\nAnswer: Canberra\n";
    let report = grade_text(text, &capitals_key());

    let mut buf = Vec::new();
    write_delimited(&report, &mut buf, ',').unwrap();
    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "scored,Q1,,Paris,Paris,100,10,10");
    assert_eq!(lines[2], "scored,Q2,,Canberra,Berlin,29,10,0");
}
