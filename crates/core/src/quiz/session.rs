use thiserror::Error;
use tracing::debug;

use crate::model::Question;
use crate::quiz::review::QuestionReview;
use crate::quiz::score::Score;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("option {index} is out of range for a question with {count} options")]
    OptionOutOfRange { index: usize, count: usize },

    #[error("answers are locked while results are shown")]
    ResultsLocked,
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Coarse mode of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Results,
}

/// Outcome of [`QuizSession::go_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Nothing changed: the current question is unanswered or results are shown.
    Blocked,
    /// Moved to the next question.
    Moved,
    /// Left the last question and entered the results phase.
    Finished(Score),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run-through of a fixed question set.
///
/// Invariants:
/// - `selected.len() == questions.len()`
/// - `current < questions.len()`
/// - answers only change while `phase == InProgress`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    selected: Vec<Option<usize>>,
    current: usize,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a session over `questions` with nothing answered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        let selected = vec![None; questions.len()];
        Ok(Self {
            questions,
            selected,
            current: 0,
            phase: QuizPhase::InProgress,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Never true for a constructed session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Results
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected_answers(&self) -> &[Option<usize>] {
        &self.selected
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.selected[self.current]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.current_answer().is_some()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.current > 0
    }

    /// Record `option` as the answer to the current question. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::ResultsLocked` during the results phase and
    /// `QuizError::OptionOutOfRange` if `option` does not index an option of
    /// the current question. The session is unchanged on error.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        if self.phase == QuizPhase::Results {
            return Err(QuizError::ResultsLocked);
        }
        let count = self.current_question().option_count();
        if option >= count {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                count,
            });
        }
        self.selected[self.current] = Some(option);
        Ok(())
    }

    /// Move forward, or finish the quiz from the last question.
    ///
    /// Requires an answer on the current question; otherwise nothing happens.
    pub fn go_next(&mut self) -> Advance {
        if !self.can_go_next() {
            return Advance::Blocked;
        }
        if self.is_last() {
            self.phase = QuizPhase::Results;
            let score = self.compute_score();
            debug!(score = %score, "quiz finished");
            return Advance::Finished(score);
        }
        self.current += 1;
        Advance::Moved
    }

    /// Move back one question. Returns false when already on the first one.
    pub fn go_prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Clear every answer and return to the first question.
    pub fn reset(&mut self) {
        if self.phase == QuizPhase::Results {
            debug!("quiz restarted from results");
        }
        self.selected.fill(None);
        self.current = 0;
        self.phase = QuizPhase::InProgress;
    }

    #[must_use]
    pub fn compute_score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .zip(&self.selected)
            .filter(|(question, selected)| {
                selected.is_some_and(|option| question.is_correct(option))
            })
            .count();
        Score::new(correct, self.questions.len())
    }

    /// Per-question breakdown for the results view.
    #[must_use]
    pub fn review(&self) -> Vec<QuestionReview> {
        self.questions
            .iter()
            .zip(&self.selected)
            .enumerate()
            .map(|(position, (question, selected))| {
                QuestionReview::new(position, question, *selected)
            })
            .collect()
    }
}
