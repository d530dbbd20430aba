pub mod exam_service;
pub mod exam_session;
pub mod generation;
pub mod question_set_service;
pub mod scoring;

pub use exam_service::ExamService;
pub use exam_session::{ExamSession, ExamSessionState};
pub use generation::{HttpQuestionGenerator, QuestionGenerator, UploadedDocument};
pub use question_set_service::QuestionSetService;
pub use scoring::{AnswerMap, GradingPolicy, ScoreSummary, ScoringEngine};
