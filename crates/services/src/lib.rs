#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;

pub use catalog::{
    DirectorySections, EmbeddedSections, QuizCatalogService, SectionListItem, SectionSource,
    StartedQuiz,
};
pub use error::CatalogError;
