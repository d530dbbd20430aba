pub mod exam_result;
pub mod question;
pub mod question_set;
pub use cached_test::CachedTest;
pub use exam_result::{ExamResult, SubmittedAnswer};
pub use question::{Question, QuestionKind};
pub use question_set::{Difficulty, QuestionCounts, QuestionSet};
