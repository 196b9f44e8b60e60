//! Flat table and JSON exports of a graded report.

use std::io::{self, Write};

use gradebook_core::GradeReport;

const HEADER: [&str; 8] = [
    "status",
    "question_number",
    "question_text",
    "student_answer",
    "reference_answer",
    "similarity",
    "max_marks",
    "awarded_marks",
];

/// Write one row per scored answer, then one per unmatched question.
///
/// Unmatched rows leave the score columns empty so "not found in key" never
/// reads as "scored zero".
pub fn write_delimited<W: Write>(report: &GradeReport, out: &mut W, delimiter: char) -> io::Result<()> {
    write_row(out, delimiter, HEADER.iter().map(|h| h.to_string()))?;

    for row in &report.scored {
        write_row(
            out,
            delimiter,
            [
                "scored".to_string(),
                row.question_number.clone(),
                row.question_text.clone(),
                row.student_answer.clone(),
                row.reference_answer.clone(),
                row.similarity.to_string(),
                row.max_marks.to_string(),
                row.awarded_marks.to_string(),
            ],
        )?;
    }

    for row in &report.unmatched {
        write_row(
            out,
            delimiter,
            [
                row.reason.as_str().to_string(),
                row.question_number.clone().unwrap_or_default(),
                row.question_text.clone(),
                row.answer_text.clone(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
        )?;
    }

    Ok(())
}

/// Pretty-printed JSON of the whole report.
pub fn to_json(report: &GradeReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn write_row<W, I>(out: &mut W, delimiter: char, fields: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let line = fields
        .into_iter()
        .map(|f| escape(&f, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string());
    writeln!(out, "{line}")
}

fn escape(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains(['"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
