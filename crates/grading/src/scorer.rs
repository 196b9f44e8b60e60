//! Mark banding: a coarse step function from similarity to awarded marks.

use crate::similarity::similarity;

/// Similarity band, evaluated top-down with inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Band {
    Zero,
    Half,
    ThreeQuarters,
    Full,
}

impl Band {
    const FULL_MIN: f64 = 90.0;
    const THREE_QUARTERS_MIN: f64 = 70.0;
    const HALF_MIN: f64 = 50.0;

    pub fn for_score(score: f64) -> Self {
        if score >= Self::FULL_MIN {
            Band::Full
        } else if score >= Self::THREE_QUARTERS_MIN {
            Band::ThreeQuarters
        } else if score >= Self::HALF_MIN {
            Band::Half
        } else {
            Band::Zero
        }
    }

    /// Fraction of max marks awarded in this band.
    pub fn fraction(&self) -> f64 {
        match self {
            Band::Full => 1.0,
            Band::ThreeQuarters => 0.75,
            Band::Half => 0.5,
            Band::Zero => 0.0,
        }
    }
}

/// Marks awarded for a similarity score: `max_marks`, `0.75x`, `0.5x` or `0`.
pub fn assign_marks(score: f64, max_marks: f64) -> f64 {
    Band::for_score(score).fraction() * max_marks
}

/// `(similarity, awarded_marks)` for one student answer.
pub fn score_answer(student: &str, reference: &str, max_marks: f64) -> (f64, f64) {
    let score = similarity(student, reference);
    (score, assign_marks(score, max_marks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(assign_marks(90.0, 10.0), 10.0);
        assert_eq!(assign_marks(89.999, 10.0), 7.5);
        assert_eq!(assign_marks(70.0, 10.0), 7.5);
        assert_eq!(assign_marks(69.999, 10.0), 5.0);
        assert_eq!(assign_marks(50.0, 10.0), 5.0);
        assert_eq!(assign_marks(49.999, 10.0), 0.0);
    }

    #[test]
    fn extremes() {
        assert_eq!(assign_marks(100.0, 4.0), 4.0);
        assert_eq!(assign_marks(0.0, 4.0), 0.0);
        assert_eq!(assign_marks(f64::NAN, 4.0), 0.0);
        assert_eq!(assign_marks(95.0, 0.0), 0.0);
    }

    #[test]
    fn monotonic_and_in_allowed_set() {
        for max_marks in [0.0, 1.0, 3.0, 10.0, 12.5] {
            let allowed = [0.0, 0.5 * max_marks, 0.75 * max_marks, max_marks];
            let mut previous = f64::NEG_INFINITY;
            for step in 0..=1000 {
                let score = step as f64 / 10.0;
                let marks = assign_marks(score, max_marks);
                assert!(allowed.contains(&marks), "score {score} gave {marks}");
                assert!(marks >= previous, "not monotonic at {score}");
                previous = marks;
            }
        }
    }

    #[test]
    fn bands_are_ordered() {
        assert!(Band::for_score(95.0) > Band::for_score(75.0));
        assert!(Band::for_score(75.0) > Band::for_score(55.0));
        assert!(Band::for_score(55.0) > Band::for_score(5.0));
    }

    #[test]
    fn scores_answers() {
        assert_eq!(score_answer("Paris", "Paris", 10.0), (100.0, 10.0));
        assert_eq!(score_answer("Canberra", "Berlin", 10.0), (29.0, 0.0));
        assert_eq!(score_answer("kitten", "sitting", 8.0), (62.0, 4.0));
    }
}
