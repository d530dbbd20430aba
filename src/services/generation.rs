use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Question;
use crate::models::dto::request::GenerationParams;

/// A document as received from the caller, prior to generation.
#[derive(Clone, Debug)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Boundary to the external document-to-questions service. The
/// service is a black box; implementations only move bytes and
/// enforce the response contract.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        document: &UploadedDocument,
        params: &GenerationParams,
    ) -> AppResult<Vec<Question>>;
}

/// Enforces the response contract: a reply without a `questions`
/// array, or with an empty one, is a generation failure rather than a
/// zero-question success. Per-question shape problems fail here too;
/// per-tag semantic rules are checked later at set construction.
fn parse_questions(payload: &Value) -> AppResult<Vec<Question>> {
    let questions = payload.get("questions").ok_or_else(|| {
        AppError::GenerationFailed("Generator response has no questions field".to_string())
    })?;

    let items = questions.as_array().ok_or_else(|| {
        AppError::GenerationFailed("Generator response questions is not an array".to_string())
    })?;

    if items.is_empty() {
        return Err(AppError::GenerationFailed(
            "Generator returned zero questions".to_string(),
        ));
    }

    items
        .iter()
        .map(|item| {
            serde_json::from_value::<Question>(item.clone()).map_err(|err| {
                AppError::GenerationFailed(format!("Malformed question in response: {}", err))
            })
        })
        .collect()
}

/// HTTP client for the generation service, speaking its multipart
/// contract.
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuestionGenerator {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|err| AppError::InternalError(format!("HTTP client build failed: {}", err)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(
        &self,
        document: &UploadedDocument,
        params: &GenerationParams,
    ) -> AppResult<Vec<Question>> {
        let file_part = reqwest::multipart::Part::bytes(document.bytes.clone())
            .file_name(document.name.clone());

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("num_mcqs", params.num_mcqs.to_string())
            .text("num_short", params.num_short.to_string())
            .text("num_medium", params.num_medium.to_string())
            .text("num_long", params.num_long.to_string())
            .text("subject", params.subject.clone())
            .text("difficulty", params.difficulty.label());

        let response = self
            .client
            .post(format!("{}/api/generate-questions", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationFailed(format!(
                "Generator returned {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await?;
        parse_questions(&payload)
    }
}
