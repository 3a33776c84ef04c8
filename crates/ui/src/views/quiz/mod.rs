mod page;
mod results;
mod view;

pub use page::QuizPage;
pub use view::QuizView;
#[cfg(test)]
pub(crate) use view::{QuizTestHandles, handle_shortcut};
