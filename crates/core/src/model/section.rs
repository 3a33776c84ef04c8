use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("section slug must be non-empty lowercase ascii, digits or '-': {raw:?}")]
    InvalidSlug { raw: String },

    #[error("section name cannot be empty")]
    EmptyName,

    #[error("section has no questions")]
    NoQuestions,

    #[error("question {position}: {source}")]
    Question {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// URL-safe identifier for a quiz section (e.g. `html`, `react-hooks`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectionSlug(String);

impl SectionSlug {
    /// Create a validated slug.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidSlug` unless the trimmed value is made of
    /// lowercase ascii letters, digits and `-` and does not start with `-`.
    pub fn new(value: impl Into<String>) -> Result<Self, SectionError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && !trimmed.starts_with('-')
            && trimmed
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
        if !valid {
            return Err(SectionError::InvalidSlug { raw });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SectionSlug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Unvalidated section as stored in a question bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub slug: String,
    pub name: String,
    pub questions: Vec<QuestionDraft>,
}

impl SectionDraft {
    /// # Errors
    ///
    /// Returns the first `SectionError` found. Question errors carry the
    /// zero-based position of the offending question.
    pub fn validate(self) -> Result<QuizSection, SectionError> {
        let slug = SectionSlug::new(self.slug)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SectionError::EmptyName);
        }
        if self.questions.is_empty() {
            return Err(SectionError::NoQuestions);
        }
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(position, draft)| {
                draft
                    .validate()
                    .map_err(|source| SectionError::Question { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuizSection {
            slug,
            name: name.to_string(),
            questions,
        })
    }
}

/// The question bank that closes one lesson track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSection {
    slug: SectionSlug,
    name: String,
    questions: Vec<Question>,
}

impl QuizSection {
    /// # Errors
    ///
    /// Returns `SectionError::EmptyName` or `SectionError::NoQuestions`.
    pub fn new(
        slug: SectionSlug,
        name: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, SectionError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(SectionError::EmptyName);
        }
        if questions.is_empty() {
            return Err(SectionError::NoQuestions);
        }
        Ok(Self {
            slug,
            name,
            questions,
        })
    }

    #[must_use]
    pub fn slug(&self) -> &SectionSlug {
        &self.slug
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

impl<'de> Deserialize<'de> for QuizSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        SectionDraft::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}
