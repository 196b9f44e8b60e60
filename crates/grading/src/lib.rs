//! Answer segmentation and similarity scoring for exam submissions.
//!
//! Stages run strictly forward over one submission:
//! - `locate`: roll number and subject fields
//! - `segment`: split text into question/answer records
//! - `normalize`: question numbers and answer prefixes
//! - `scorer`: similarity ratio and mark banding
//! - `report`: join with the answer key and total up
//!
//! `pipeline` chains them; `batch` runs independent submissions in parallel;
//! `export` writes reports as delimited tables or JSON.

pub mod batch;
pub mod export;
pub mod locate;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod segment;
pub mod similarity;

pub use batch::{grade_batch, BatchOutcome, Submission};
pub use export::{to_json, write_delimited};
pub use locate::{locate_roll_number, locate_subject, UNKNOWN_ROLL_NUMBER};
pub use normalize::{normalize, parse_question_label, strip_answer_prefix};
pub use pipeline::{grade_document, grade_text};
pub use report::assemble;
pub use scorer::{assign_marks, score_answer, Band};
pub use segment::segment_answers;
pub use similarity::similarity;
