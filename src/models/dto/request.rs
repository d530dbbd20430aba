use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

use crate::models::domain::question_set::Difficulty;

/// Generation parameters accompanying the uploaded document. Field
/// names and defaults mirror the generation service's multipart
/// contract (5/3/2/1, General Knowledge, medium difficulty).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerationParams {
    #[validate(range(max = 50))]
    pub num_mcqs: u32,

    #[validate(range(max = 50))]
    pub num_short: u32,

    #[validate(range(max = 50))]
    pub num_medium: u32,

    #[validate(range(max = 50))]
    pub num_long: u32,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    pub difficulty: Difficulty,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_mcqs: 5,
            num_short: 3,
            num_medium: 2,
            num_long: 1,
            subject: "General Knowledge".to_string(),
            difficulty: Difficulty::default(),
        }
    }
}

/// Body of an exam submission. Keys are question ids; values are the
/// user's answers as typed. Ids unknown to the question set are
/// accepted here and ignored by scoring.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitExamRequest {
    pub answers: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
