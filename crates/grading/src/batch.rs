//! Parallel grading of independent submissions.
//!
//! Each submission runs the full pipeline on its own rayon task; nothing is
//! shared between tasks except the read-only key.

use rayon::prelude::*;

use gradebook_core::{AnswerKey, GradeError, GradeReport};
use gradebook_ingest::extractor_for;

use crate::pipeline::grade_document;

/// One submission file held in memory.
#[derive(Debug, Clone)]
pub struct Submission {
    /// File name; its extension picks the extractor.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Result for one submission, in input order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<GradeReport, GradeError>,
}

/// Grade every submission on a pool of `workers` threads (0 = one per core).
pub fn grade_batch(
    submissions: &[Submission],
    key: &AnswerKey,
    workers: usize,
) -> Result<Vec<BatchOutcome>, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    tracing::info!(
        submissions = submissions.len(),
        workers = pool.current_num_threads(),
        "grading batch"
    );

    let outcomes = pool.install(|| {
        submissions
            .par_iter()
            .map(|submission| BatchOutcome {
                name: submission.name.clone(),
                result: grade_one(submission, key),
            })
            .collect::<Vec<_>>()
    });

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, "some submissions could not be graded");
    }
    Ok(outcomes)
}

fn grade_one(submission: &Submission, key: &AnswerKey) -> Result<GradeReport, GradeError> {
    let extractor = extractor_for(&submission.name)?;
    grade_document(&submission.bytes, extractor.as_ref(), key).map_err(|e| {
        tracing::warn!(submission = %submission.name, error = %e, "submission failed");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::{AnswerKeyEntry, ExtractionError};

    fn submission(name: &str, text: &str) -> Submission {
        Submission {
            name: name.to_string(),
            bytes: text.as_bytes().to_vec(),
        }
    }

    #[test]
    fn grades_in_input_order() {
        let key = AnswerKey::new(vec![AnswerKeyEntry::new("Q1", "Paris", 10.0)]).unwrap();
        let submissions: Vec<Submission> = (0..20)
            .map(|i| submission(&format!("s{i}.txt"), &format!("Roll Number: {i}\nQ 1\nAnswer: Paris")))
            .collect();

        let outcomes = grade_batch(&submissions, &key, 4).unwrap();
        assert_eq!(outcomes.len(), 20);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.name, format!("s{i}.txt"));
            let report = outcome.result.as_ref().unwrap();
            assert_eq!(report.roll_number, i.to_string());
            assert_eq!(report.total_obtained, 10.0);
        }
    }

    #[test]
    fn failures_stay_per_submission() {
        let key = AnswerKey::new(vec![AnswerKeyEntry::new("Q1", "Paris", 10.0)]).unwrap();
        let submissions = vec![
            submission("good.txt", "Q 1\nParis"),
            submission("bad.docx", "Q 1\nParis"),
        ];
        let outcomes = grade_batch(&submissions, &key, 0).unwrap();
        assert!(outcomes[0].result.is_ok());
        assert!(matches!(
            outcomes[1].result,
            Err(GradeError::Extraction(ExtractionError::UnsupportedType(_)))
        ));
    }
}
