mod question;
mod section;

pub use question::{Question, QuestionDraft, QuestionError};
pub use section::{QuizSection, SectionDraft, SectionError, SectionSlug};
