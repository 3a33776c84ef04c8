mod markdown_vm;
mod quiz_vm;
mod section_vm;

pub use markdown_vm::{markdown_inline_to_html, markdown_to_html, sanitize_html};
pub use quiz_vm::{
    QuizIntent, QuizOptionVm, QuizOutcome, QuizQuestionVm, QuizResultsVm, ReviewRowVm,
    apply_intent, intent_for_key, map_quiz_question, map_quiz_results,
};
pub use section_vm::{SectionCardVm, map_section_cards};
