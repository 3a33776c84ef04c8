mod review;
mod score;
mod session;

pub use review::QuestionReview;
pub use score::{FeedbackTier, Score};
pub use session::{Advance, QuizError, QuizPhase, QuizSession};
