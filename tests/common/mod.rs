#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use examgen_server::{
    errors::{AppError, AppResult},
    models::domain::{
        question_set::QuestionCounts, Difficulty, ExamResult, Question, QuestionKind, QuestionSet,
        SubmittedAnswer,
    },
    models::dto::request::GenerationParams,
    repositories::{ExamResultRepository, QuestionSetRepository},
    services::{QuestionGenerator, UploadedDocument},
};

pub struct InMemoryQuestionSetRepository {
    sets: Arc<RwLock<HashMap<String, QuestionSet>>>,
}

impl InMemoryQuestionSetRepository {
    pub fn new() -> Self {
        Self {
            sets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.sets.read().await.len()
    }
}

#[async_trait]
impl QuestionSetRepository for InMemoryQuestionSetRepository {
    async fn insert(&self, set: QuestionSet) -> AppResult<QuestionSet> {
        let mut sets = self.sets.write().await;
        if sets.contains_key(&set.id) {
            return Err(AppError::DatabaseError(format!(
                "Question set with id '{}' already exists",
                set.id
            )));
        }

        sets.insert(set.id.clone(), set.clone());
        Ok(set)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> AppResult<Option<QuestionSet>> {
        let sets = self.sets.read().await;
        Ok(sets.get(id).filter(|s| s.user_id == user_id).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuestionSet>, i64)> {
        let sets = self.sets.read().await;
        let mut items: Vec<_> = sets
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}

pub struct InMemoryExamResultRepository {
    results: Arc<RwLock<HashMap<String, ExamResult>>>,
}

impl InMemoryExamResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.results.read().await.len()
    }
}

#[async_trait]
impl ExamResultRepository for InMemoryExamResultRepository {
    async fn insert(&self, result: ExamResult) -> AppResult<ExamResult> {
        let mut results = self.results.write().await;
        if results.contains_key(&result.id) {
            return Err(AppError::DatabaseError(format!(
                "Exam result with id '{}' already exists",
                result.id
            )));
        }

        results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn find_latest_for_set(
        &self,
        user_id: &str,
        question_set_id: &str,
    ) -> AppResult<Option<ExamResult>> {
        let results = self.results.read().await;
        Ok(results
            .values()
            .filter(|r| r.user_id == user_id && r.question_set_id == question_set_id)
            .max_by_key(|r| r.created_at)
            .cloned())
    }
}

/// Generator double that hands back a fixed question list.
pub struct StubGenerator {
    pub questions: Vec<Question>,
}

#[async_trait]
impl QuestionGenerator for StubGenerator {
    async fn generate(
        &self,
        _document: &UploadedDocument,
        _params: &GenerationParams,
    ) -> AppResult<Vec<Question>> {
        Ok(self.questions.clone())
    }
}

pub fn make_mcq(id: u32, correct: &str) -> Question {
    let options = std::collections::BTreeMap::from([
        ("A".to_string(), "Option A".to_string()),
        ("B".to_string(), "Option B".to_string()),
        ("C".to_string(), "Option C".to_string()),
        ("D".to_string(), "Option D".to_string()),
    ]);

    Question {
        id,
        text: format!("Multiple choice question {}", id),
        kind: QuestionKind::Mcq,
        marks: 1,
        options: Some(options),
        correct_answer: Some(correct.to_string()),
    }
}

pub fn make_short(id: u32) -> Question {
    Question {
        id,
        text: format!("Short answer question {}", id),
        kind: QuestionKind::Short,
        marks: 2,
        options: None,
        correct_answer: None,
    }
}

/// Two one-mark MCQs (correct A and B) plus a two-mark short question.
pub fn sample_questions() -> Vec<Question> {
    vec![make_mcq(1, "A"), make_mcq(2, "B"), make_short(3)]
}

pub fn make_set(user_id: &str, subject: &str) -> QuestionSet {
    QuestionSet::new(
        user_id,
        "notes.pdf",
        "deadbeef",
        512,
        subject,
        Difficulty::Medium,
        QuestionCounts {
            mcq: 2,
            short: 1,
            medium: 0,
            long: 0,
        },
        sample_questions(),
    )
    .expect("set should validate")
}

pub fn make_result(user_id: &str, question_set_id: &str) -> ExamResult {
    ExamResult::new(
        user_id,
        question_set_id,
        3,
        4,
        1.4,
        Some(35.0),
        vec![SubmittedAnswer {
            question_id: 3,
            answer: "Resistance to change in motion.".to_string(),
        }],
    )
}

pub fn make_document() -> UploadedDocument {
    UploadedDocument {
        name: "physics.pdf".to_string(),
        bytes: b"%PDF-1.4 dummy".to_vec(),
    }
}
