mod service;
mod source;

pub use service::{QuizCatalogService, SectionListItem, StartedQuiz};
pub use source::{DirectorySections, EmbeddedSections, SectionSource, parse_section};
