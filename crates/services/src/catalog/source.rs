use std::path::PathBuf;

use quiz_core::model::{QuizSection, SectionDraft};
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Where question banks come from.
pub trait SectionSource: Send + Sync {
    /// Load every section in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a bank cannot be read or is invalid.
    fn load(&self) -> Result<Vec<QuizSection>, CatalogError>;
}

/// Parse one JSON question bank. `origin` names the bank in errors.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed JSON and
/// `CatalogError::Section` for well-formed banks with invalid content.
pub fn parse_section(origin: &str, json: &str) -> Result<QuizSection, CatalogError> {
    let draft: SectionDraft = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    draft.validate().map_err(|source| CatalogError::Section {
        origin: origin.to_string(),
        source,
    })
}

//
// ─── EMBEDDED ──────────────────────────────────────────────────────────────────
//

const EMBEDDED: [(&str, &str); 4] = [
    ("html.json", include_str!("../../content/html.json")),
    ("css.json", include_str!("../../content/css.json")),
    ("javascript.json", include_str!("../../content/javascript.json")),
    ("react.json", include_str!("../../content/react.json")),
];

/// The banks that ship with the binary, one per lesson track.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSections;

impl SectionSource for EmbeddedSections {
    fn load(&self) -> Result<Vec<QuizSection>, CatalogError> {
        EMBEDDED
            .iter()
            .map(|(origin, json)| parse_section(origin, json))
            .collect()
    }
}

//
// ─── DIRECTORY ─────────────────────────────────────────────────────────────────
//

/// Every `*.json` file in a directory, ordered by file name.
#[derive(Debug, Clone)]
pub struct DirectorySections {
    root: PathBuf,
}

impl DirectorySections {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bank_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let io_err = |source| CatalogError::Io {
            path: self.root.clone(),
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-bank entry");
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl SectionSource for DirectorySections {
    fn load(&self) -> Result<Vec<QuizSection>, CatalogError> {
        let paths = self.bank_paths()?;
        if paths.is_empty() {
            warn!(root = %self.root.display(), "content directory has no question banks");
            return Err(CatalogError::EmptyDirectory(self.root.clone()));
        }

        paths
            .iter()
            .map(|path| {
                let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_section(&path.display().to_string(), &json)
            })
            .collect()
    }
}
