use gradebook_core::AnswerRecord;

/// Literal prefix that opens a new question.
const QUESTION_PREFIX: &str = "Q ";

/// Split submission text into question/answer records in document order.
///
/// A trimmed line starting with `"Q "` opens a question; the lines after it,
/// up to the next label or end of text, form its answer. Text before the
/// first label is discarded.
pub fn segment_answers(text: &str) -> Vec<AnswerRecord> {
    let mut records = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if line.starts_with(QUESTION_PREFIX) {
            if let Some((label, body)) = current.take() {
                records.push(flush(label, &body));
            }
            current = Some((line.to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((label, body)) = current {
        records.push(flush(label, &body));
    }

    tracing::debug!(records = records.len(), "segmented submission");
    records
}

fn flush(question_label: String, body: &[&str]) -> AnswerRecord {
    AnswerRecord {
        question_label,
        raw_answer_text: body.join(" ").trim().to_string(),
    }
}
