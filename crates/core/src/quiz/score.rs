use serde::Serialize;

/// Number of correctly answered questions out of the quiz length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    /// Builds a score, clamping `correct` to `total`.
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn correct(self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    /// Whole-number percentage, rounded down. An empty quiz scores 0.
    #[must_use]
    pub fn percent(self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.correct * 100 / self.total
    }

    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    #[must_use]
    pub fn tier(self) -> FeedbackTier {
        FeedbackTier::for_score(self)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// Qualitative bucket for a finished quiz.
///
/// - `Perfect`: every answer correct
/// - `Great`: at least 70%
/// - `Good`: at least 50%
/// - `NeedsPractice`: below 50%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackTier {
    Perfect,
    Great,
    Good,
    NeedsPractice,
}

impl FeedbackTier {
    const GREAT_PERCENT: usize = 70;
    const GOOD_PERCENT: usize = 50;

    #[must_use]
    pub fn for_score(score: Score) -> Self {
        let scaled = score.correct() * 100;
        let total = score.total();
        if score.is_perfect() {
            Self::Perfect
        } else if total > 0 && scaled >= Self::GREAT_PERCENT * total {
            Self::Great
        } else if total > 0 && scaled >= Self::GOOD_PERCENT * total {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! You've mastered this section.",
            Self::Great => "Great job! You have a solid understanding of the material.",
            Self::Good => "Good effort! Review the lessons and try again to improve.",
            Self::NeedsPractice => "Keep practicing! Go back over the lessons and try again.",
        }
    }
}
