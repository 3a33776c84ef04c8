use std::collections::HashSet;

use quiz_core::model::{QuizSection, SectionSlug};
use quiz_core::quiz::QuizSession;
use tracing::info;

use crate::catalog::source::SectionSource;
use crate::error::CatalogError;

/// Row for the section list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionListItem {
    pub slug: SectionSlug,
    pub name: String,
    pub question_count: usize,
}

impl From<&QuizSection> for SectionListItem {
    fn from(section: &QuizSection) -> Self {
        Self {
            slug: section.slug().clone(),
            name: section.name().to_string(),
            question_count: section.question_count(),
        }
    }
}

/// A freshly started quiz and the label it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedQuiz {
    pub section_name: String,
    pub session: QuizSession,
}

/// Read-only set of quiz sections, looked up by slug.
#[derive(Debug, Clone)]
pub struct QuizCatalogService {
    sections: Vec<QuizSection>,
}

impl QuizCatalogService {
    /// Build a catalog from already validated sections.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateSection` if two sections share a slug.
    pub fn new(sections: Vec<QuizSection>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.slug()) {
                return Err(CatalogError::DuplicateSection(section.slug().clone()));
            }
        }
        Ok(Self { sections })
    }

    /// Load sections from `source` and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for load failures or duplicate slugs.
    pub fn from_source(source: &dyn SectionSource) -> Result<Self, CatalogError> {
        let catalog = Self::new(source.load()?)?;
        info!(
            sections = catalog.sections.len(),
            questions = catalog.total_questions(),
            "quiz catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn sections(&self) -> Vec<SectionListItem> {
        self.sections.iter().map(SectionListItem::from).collect()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(QuizSection::question_count).sum()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSection` if no section has this slug.
    pub fn section(&self, slug: &str) -> Result<&QuizSection, CatalogError> {
        self.sections
            .iter()
            .find(|section| section.slug().as_str() == slug)
            .ok_or_else(|| CatalogError::UnknownSection(slug.to_string()))
    }

    /// Start a new quiz over the section's questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSection` if no section has this slug.
    pub fn start_quiz(&self, slug: &str) -> Result<StartedQuiz, CatalogError> {
        let section = self.section(slug)?;
        let session = QuizSession::new(section.questions().to_vec())?;
        info!(section = %section.slug(), "quiz started");
        Ok(StartedQuiz {
            section_name: section.name().to_string(),
            session,
        })
    }
}
