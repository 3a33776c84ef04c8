use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range for {count} options")]
    CorrectOptionOutOfRange { index: usize, count: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a question bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option,
        }
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// Prompt and option text are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, there are
    /// fewer than two options, or `correct_option` does not index an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let count = self.options.len();
        if count < 2 {
            return Err(QuestionError::TooFewOptions { count });
        }

        let mut options = Vec::with_capacity(count);
        for (index, option) in self.options.iter().enumerate() {
            let option = option.trim();
            if option.is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            options.push(option.to_owned());
        }

        if self.correct_option >= count {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: self.correct_option,
                count,
            });
        }

        Ok(Question {
            prompt: prompt.to_owned(),
            options,
            correct_option: self.correct_option,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// Always has at least two options and a correct option that indexes one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    /// Shorthand for building and validating a draft.
    ///
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: usize,
    ) -> Result<Self, QuestionError> {
        QuestionDraft::new(prompt, options, correct_option).validate()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option]
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        QuestionDraft::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}
