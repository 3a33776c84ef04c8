//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{SectionError, SectionSlug};
use quiz_core::quiz::QuizError;

/// Errors emitted while loading or querying the quiz catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question bank {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no question banks found in {0}")]
    EmptyDirectory(PathBuf),
    #[error("duplicate section slug: {0}")]
    DuplicateSection(SectionSlug),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("invalid question bank {origin}: {source}")]
    Section {
        origin: String,
        #[source]
        source: SectionError,
    },
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
