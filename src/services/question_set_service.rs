use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use validator::Validate;

use crate::{
    cache::TestCache,
    errors::{AppError, AppResult},
    models::domain::question_set::QuestionCounts,
    models::domain::{CachedTest, QuestionSet},
    models::dto::request::{GenerationParams, PaginationParams},
    repositories::QuestionSetRepository,
    services::generation::{QuestionGenerator, UploadedDocument},
};

/// Owns the generation flow and both persistence sinks for question
/// sets: the system of record and the per-user local cache.
pub struct QuestionSetService {
    repository: Arc<dyn QuestionSetRepository>,
    cache: Arc<dyn TestCache>,
    generator: Arc<dyn QuestionGenerator>,
}

impl QuestionSetService {
    pub fn new(
        repository: Arc<dyn QuestionSetRepository>,
        cache: Arc<dyn TestCache>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Self {
        Self {
            repository,
            cache,
            generator,
        }
    }

    /// Generation attempt, end to end: call the generator, validate
    /// the payload into a set, insert into the record store, then
    /// snapshot into the cache. The record-store insert is fatal on
    /// failure and skips the cache write; a cache failure is logged
    /// and swallowed, leaving the remote-backed flow intact.
    pub async fn generate_for_user(
        &self,
        user_id: &str,
        document: UploadedDocument,
        params: GenerationParams,
    ) -> AppResult<QuestionSet> {
        params.validate()?;

        let questions = self.generator.generate(&document, &params).await?;

        let document_hash = hash_document(&document.bytes);
        let requested = QuestionCounts {
            mcq: params.num_mcqs,
            short: params.num_short,
            medium: params.num_medium,
            long: params.num_long,
        };

        let set = QuestionSet::new(
            user_id,
            &document.name,
            &document_hash,
            document.bytes.len() as i64,
            &params.subject,
            params.difficulty,
            requested,
            questions,
        )?;

        let set = self.repository.insert(set).await?;
        log::info!(
            "Generated question set {} for user {} ({} questions, {} marks)",
            set.id,
            user_id,
            set.total_questions,
            set.total_marks
        );

        let snapshot = CachedTest::from_question_set(&set, BASE64.encode(&document.bytes));
        if let Err(err) = self.cache.save(user_id, snapshot).await {
            log::warn!("Local cache write failed for user {}: {}", user_id, err);
        }

        Ok(set)
    }

    pub async fn list_for_user(
        &self,
        user_id: &str,
        pagination: &PaginationParams,
    ) -> AppResult<(Vec<QuestionSet>, i64)> {
        pagination.validate()?;
        self.repository
            .list_by_user(user_id, pagination.offset(), pagination.limit())
            .await
    }

    pub async fn get_for_user(&self, user_id: &str, id: &str) -> AppResult<QuestionSet> {
        self.repository
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question set with id '{}' not found", id)))
    }

    pub async fn list_cached_tests(&self, user_id: &str) -> Vec<CachedTest> {
        self.cache.list(user_id).await
    }

    pub async fn get_cached_test(&self, user_id: &str, id: &str) -> AppResult<CachedTest> {
        self.cache
            .get(user_id, id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Cached test with id '{}' not found", id)))
    }

    pub async fn delete_cached_test(&self, user_id: &str, id: &str) -> AppResult<()> {
        self.cache.delete(user_id, id).await
    }
}

fn hash_document(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
