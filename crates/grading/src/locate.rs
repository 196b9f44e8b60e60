//! Labeled header fields: roll number and subject.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when a submission carries no roll number.
pub const UNKNOWN_ROLL_NUMBER: &str = "Unknown";

static ROLL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Roll Number:\s*(\d+)").expect("valid roll number pattern"));

/// Digits following the first `Roll Number:` label, or [`UNKNOWN_ROLL_NUMBER`].
///
/// The label is matched case-sensitively, exactly as the exam template prints it.
pub fn locate_roll_number(text: &str) -> String {
    ROLL_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_ROLL_NUMBER.to_string())
}

/// Value of the first line starting with `Subject:`, up to any further colon.
pub fn locate_subject(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| line.starts_with("Subject:"))
        .and_then(|line| line.split(':').nth(1))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
