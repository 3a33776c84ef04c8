use thiserror::Error;

use crate::model::{QuestionError, SectionError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
