//! Character-level indel similarity ratio.
//!
//! Compares raw character sequences: no case folding, tokenization or
//! whitespace normalization.

/// Similarity of two strings in `0..=100`, rounded to the nearest integer.
///
/// `100 * (1 - indel_distance / (len_a + len_b))`. If either side is empty,
/// including when both are, the score is 0, so an empty reference never
/// awards marks.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let total = (a.len() + b.len()) as f64;
    let distance = indel_distance(&a, &b) as f64;
    ((1.0 - distance / total) * 100.0).round()
}

/// Edit distance allowing only insertions and deletions.
pub(crate) fn indel_distance(a: &[char], b: &[char]) -> usize {
    a.len() + b.len() - 2 * lcs_len(a, b)
}

/// Longest common subsequence length, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for &ca in a {
        for j in 1..=n {
            curr[j] = if ca == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
