use dioxus::prelude::{Key, Modifiers};
use quiz_core::quiz::{Advance, FeedbackTier, QuestionReview, QuizSession, Score};
use tracing::debug;

use crate::vm::markdown_vm::{markdown_inline_to_html, markdown_to_html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
    Prev,
    Retake,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Changed,
    Ignored,
    Finished(Score),
}

/// Apply a user intent to the session.
///
/// Guarded transitions (next without an answer, selection during results)
/// come back as `Ignored` and leave the session untouched.
pub fn apply_intent(session: &mut QuizSession, intent: QuizIntent) -> QuizOutcome {
    debug!(?intent, index = session.current_index(), "quiz intent");
    match intent {
        QuizIntent::Select(option) => match session.select_answer(option) {
            Ok(()) => QuizOutcome::Changed,
            Err(err) => {
                debug!(%err, "selection ignored");
                QuizOutcome::Ignored
            }
        },
        QuizIntent::Next => match session.go_next() {
            Advance::Blocked => QuizOutcome::Ignored,
            Advance::Moved => QuizOutcome::Changed,
            Advance::Finished(score) => QuizOutcome::Finished(score),
        },
        QuizIntent::Prev => {
            if session.go_prev() {
                QuizOutcome::Changed
            } else {
                QuizOutcome::Ignored
            }
        }
        QuizIntent::Retake => {
            session.reset();
            QuizOutcome::Changed
        }
    }
}

/// Map a key press to an intent. Digits pick options (1-based).
///
/// Enter is left to the focused button. Chords with Ctrl, Alt, Meta or Shift
/// are never shortcuts.
#[must_use]
pub fn intent_for_key(key: &Key, modifiers: Modifiers) -> Option<QuizIntent> {
    let chord = Modifiers::CONTROL | Modifiers::ALT | Modifiers::META | Modifiers::SHIFT;
    if modifiers.intersects(chord) {
        return None;
    }
    match key {
        Key::ArrowRight => Some(QuizIntent::Next),
        Key::ArrowLeft => Some(QuizIntent::Prev),
        Key::Character(value) => value
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
            .map(|n| QuizIntent::Select(n - 1)),
        _ => None,
    }
}

//
// ─── IN PROGRESS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub key_hint: String,
    pub html: String,
    pub selected: bool,
    pub css_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub position_label: String,
    pub progress_percent: usize,
    pub prompt_html: String,
    pub options: Vec<QuizOptionVm>,
    pub can_prev: bool,
    pub can_next: bool,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_quiz_question(session: &QuizSession) -> QuizQuestionVm {
    let question = session.current_question();
    let position = session.current_index() + 1;
    let total = session.len();
    let selected = session.current_answer();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| QuizOptionVm {
            index,
            key_hint: (index + 1).to_string(),
            html: markdown_inline_to_html(text),
            selected: selected == Some(index),
            css_class: if selected == Some(index) {
                "quiz-option quiz-option--selected"
            } else {
                "quiz-option"
            },
        })
        .collect();

    QuizQuestionVm {
        position_label: format!("Question {position} of {total}"),
        progress_percent: position * 100 / total,
        prompt_html: markdown_to_html(question.prompt()),
        options,
        can_prev: session.can_go_prev(),
        can_next: session.can_go_next(),
        next_label: if session.is_last() { "Finish" } else { "Next" },
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub prompt_html: String,
    pub answer_html: String,
    pub is_correct: bool,
    pub correct_html: Option<String>,
    pub css_class: &'static str,
}

impl From<&QuestionReview> for ReviewRowVm {
    fn from(review: &QuestionReview) -> Self {
        Self {
            number: review.position + 1,
            prompt_html: markdown_inline_to_html(&review.prompt),
            answer_html: review
                .selected_text
                .as_deref()
                .map_or_else(|| "Unanswered".to_string(), markdown_inline_to_html),
            is_correct: review.is_correct,
            correct_html: review.correct_text.as_deref().map(markdown_inline_to_html),
            css_class: if review.is_correct {
                "quiz-review__row quiz-review__row--correct"
            } else {
                "quiz-review__row quiz-review__row--wrong"
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultsVm {
    pub score_label: String,
    pub percent_label: String,
    pub message: &'static str,
    pub tier_class: &'static str,
    pub rows: Vec<ReviewRowVm>,
}

#[must_use]
pub fn map_quiz_results(session: &QuizSession) -> QuizResultsVm {
    let score = session.compute_score();
    let tier = score.tier();
    let tier_class = match tier {
        FeedbackTier::Perfect => "quiz-results--perfect",
        FeedbackTier::Great => "quiz-results--great",
        FeedbackTier::Good => "quiz-results--good",
        FeedbackTier::NeedsPractice => "quiz-results--practice",
    };

    QuizResultsVm {
        score_label: score.to_string(),
        percent_label: format!("{}%", score.percent()),
        message: tier.message(),
        tier_class,
        rows: session.review().iter().map(ReviewRowVm::from).collect(),
    }
}
