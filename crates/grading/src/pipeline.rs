use gradebook_core::{AnswerKey, GradeError, GradeReport};
use gradebook_ingest::TextExtractor;

use crate::locate::{locate_roll_number, locate_subject};
use crate::normalize::normalize;
use crate::report::assemble;
use crate::segment::segment_answers;

/// Grade already-extracted submission text against a key.
pub fn grade_text(text: &str, key: &AnswerKey) -> GradeReport {
    let roll_number = locate_roll_number(text);
    let subject = locate_subject(text);

    let records = segment_answers(text);
    if records.is_empty() {
        tracing::warn!(roll_number = %roll_number, "no answers found in submission");
    }

    let answers = normalize(&records);
    let report = assemble(roll_number, subject, &answers, key);

    tracing::info!(
        roll_number = %report.roll_number,
        scored = report.scored.len(),
        unmatched = report.unmatched.len(),
        obtained = report.total_obtained,
        possible = report.total_possible,
        "graded submission"
    );
    report
}

/// Extract and grade one submission. Extraction failure is fatal for the
/// submission; no partial report is returned.
pub fn grade_document(
    bytes: &[u8],
    extractor: &dyn TextExtractor,
    key: &AnswerKey,
) -> Result<GradeReport, GradeError> {
    let text = extractor.extract(bytes)?;
    Ok(grade_text(&text, key))
}
