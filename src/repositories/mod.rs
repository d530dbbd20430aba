pub mod exam_result_repository;
pub mod question_set_repository;

pub use exam_result_repository::{ExamResultRepository, MongoExamResultRepository};
pub use question_set_repository::{MongoQuestionSetRepository, QuestionSetRepository};
