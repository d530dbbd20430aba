use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answer as submitted, keyed to its question. Stored as an
/// ordered list rather than a map so the document shape stays plain
/// BSON regardless of the numeric key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedAnswer {
    pub question_id: u32,
    pub answer: String,
}

/// The scored outcome of one exam attempt. Write-once: a retake
/// creates a new record, and the current result for a set is the one
/// with the latest `created_at`. `percentage` is absent exactly when
/// the set carried zero total marks, which readers must surface as
/// ungradable rather than 0%.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExamResult {
    pub id: String,
    pub user_id: String,
    pub question_set_id: String,
    pub total_questions: u32,
    pub total_marks: u32,
    pub marks_obtained: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    pub answers: Vec<SubmittedAnswer>,
    pub created_at: DateTime<Utc>,
}

impl ExamResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: &str,
        question_set_id: &str,
        total_questions: u32,
        total_marks: u32,
        marks_obtained: f64,
        percentage: Option<f64>,
        answers: Vec<SubmittedAnswer>,
    ) -> Self {
        ExamResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            question_set_id: question_set_id.to_string(),
            total_questions,
            total_marks,
            marks_obtained,
            percentage,
            answers,
            created_at: Utc::now(),
        }
    }

    /// Rebuilds the answer map from the stored pairs.
    pub fn answer_map(&self) -> BTreeMap<u32, String> {
        self.answers
            .iter()
            .map(|a| (a.question_id, a.answer.clone()))
            .collect()
    }
}
