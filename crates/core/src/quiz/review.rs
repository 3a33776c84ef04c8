use serde::Serialize;

use crate::model::Question;

/// One row of the results review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionReview {
    pub position: usize,
    pub prompt: String,
    /// `None` when the learner left the question unanswered.
    pub selected_text: Option<String>,
    pub is_correct: bool,
    /// Only present when the answer was wrong or missing.
    pub correct_text: Option<String>,
}

impl QuestionReview {
    #[must_use]
    pub fn new(position: usize, question: &Question, selected: Option<usize>) -> Self {
        let selected_text = selected
            .and_then(|index| question.option(index))
            .map(str::to_string);
        let is_correct = selected.is_some_and(|index| question.is_correct(index));
        let correct_text = (!is_correct).then(|| question.correct_text().to_string());

        Self {
            position,
            prompt: question.prompt().to_string(),
            selected_text,
            is_correct,
            correct_text,
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected_text.is_some()
    }
}
