use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::question::QuestionKind;
use crate::models::domain::question_set::Difficulty;
use crate::models::domain::{CachedTest, ExamResult, QuestionSet};

/// List-view projection of a question set: metadata only, no question
/// bodies.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSetSummary {
    pub id: String,
    pub document_name: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub total_questions: u32,
    pub total_marks: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&QuestionSet> for QuestionSetSummary {
    fn from(set: &QuestionSet) -> Self {
        QuestionSetSummary {
            id: set.id.clone(),
            document_name: set.document_name.clone(),
            subject: set.subject.clone(),
            difficulty: set.difficulty,
            total_questions: set.total_questions,
            total_marks: set.total_marks,
            created_at: set.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSetListResponse {
    pub question_sets: Vec<QuestionSetSummary>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamResultResponse {
    pub id: String,
    pub question_set_id: String,
    pub total_questions: u32,
    pub total_marks: u32,
    pub marks_obtained: f64,
    /// Absent when the set carried zero total marks (ungradable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<&ExamResult> for ExamResultResponse {
    fn from(result: &ExamResult) -> Self {
        ExamResultResponse {
            id: result.id.clone(),
            question_set_id: result.question_set_id.clone(),
            total_questions: result.total_questions,
            total_marks: result.total_marks,
            marks_obtained: result.marks_obtained,
            percentage: result.percentage,
            created_at: result.created_at,
        }
    }
}

/// One row of the per-question review shown after an exam.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionReview {
    pub question_id: u32,
    pub text: String,
    pub kind: QuestionKind,
    pub marks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub awarded: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultReviewResponse {
    pub result: ExamResultResponse,
    pub review: Vec<QuestionReview>,
}

/// List-view projection of a cached test. The document payload stays
/// out of listings; fetch a single entry for the full snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CachedTestSummary {
    pub id: String,
    pub document_name: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub total_questions: u32,
    pub total_marks: u32,
    pub saved_at: DateTime<Utc>,
}

impl From<&CachedTest> for CachedTestSummary {
    fn from(test: &CachedTest) -> Self {
        CachedTestSummary {
            id: test.id.clone(),
            document_name: test.document_name.clone(),
            subject: test.subject.clone(),
            difficulty: test.difficulty,
            total_questions: test.total_questions,
            total_marks: test.total_marks,
            saved_at: test.saved_at,
        }
    }
}
