use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::Question;

/// The three difficulty levels the generation service understands.
/// Serialized with the full labels so stored records and API payloads
/// carry the exact strings the generator expects.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy, Default)]
pub enum Difficulty {
    #[serde(rename = "Easy (High School Level)")]
    Easy,
    #[default]
    #[serde(rename = "Medium (Graduate Level)")]
    Medium,
    #[serde(rename = "Hard (Advanced/Research Level)")]
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (High School Level)",
            Difficulty::Medium => "Medium (Graduate Level)",
            Difficulty::Hard => "Hard (Advanced/Research Level)",
        }
    }

    pub fn parse_label(value: &str) -> AppResult<Self> {
        match value {
            "Easy (High School Level)" => Ok(Difficulty::Easy),
            "Medium (Graduate Level)" => Ok(Difficulty::Medium),
            "Hard (Advanced/Research Level)" => Ok(Difficulty::Hard),
            other => Err(AppError::ValidationError(format!(
                "Unknown difficulty '{}'",
                other
            ))),
        }
    }
}

/// How many questions of each kind were requested at generation time.
/// Recorded as metadata; the actual member counts may differ if the
/// generator under- or over-delivers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub struct QuestionCounts {
    pub mcq: u32,
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

/// A validated, immutable set of generated questions plus the metadata
/// of the document it came from. `total_marks` is always recomputed
/// from the members at construction, never set independently.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionSet {
    pub id: String,
    pub user_id: String,
    pub document_name: String,
    pub document_hash: String,
    pub document_size: i64,
    pub subject: String,
    pub difficulty: Difficulty,
    pub question_counts: QuestionCounts,
    pub total_questions: u32,
    pub total_marks: u32,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

impl QuestionSet {
    /// Validates every member question, rejects duplicate question ids
    /// and derives `total_questions`/`total_marks`. A set with zero
    /// questions is constructible; consumers computing a percentage
    /// from it must treat `total_marks = 0` as ungradable.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: &str,
        document_name: &str,
        document_hash: &str,
        document_size: i64,
        subject: &str,
        difficulty: Difficulty,
        question_counts: QuestionCounts,
        questions: Vec<Question>,
    ) -> AppResult<Self> {
        for question in &questions {
            question.validate()?;
        }

        let mut seen = std::collections::HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate question id {}",
                    question.id
                )));
            }
        }

        let total_marks = questions.iter().map(|q| q.marks).sum();

        Ok(QuestionSet {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            document_name: document_name.to_string(),
            document_hash: document_hash.to_string(),
            document_size,
            subject: subject.to_string(),
            difficulty,
            question_counts,
            total_questions: questions.len() as u32,
            total_marks,
            questions,
            created_at: Utc::now(),
        })
    }

    /// Sum of member marks, for invariant re-checks.
    pub fn sum_of_marks(&self) -> u32 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    pub fn question_by_id(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
