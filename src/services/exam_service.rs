use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ExamResult, QuestionSet},
    models::dto::response::{ExamResultResponse, QuestionReview, ResultReviewResponse},
    repositories::{ExamResultRepository, QuestionSetRepository},
    services::exam_session::ExamSession,
    services::scoring::{AnswerMap, GradingPolicy, ScoringEngine},
};

/// Drives exam attempts against stored question sets and serves the
/// scored outcomes back for review.
pub struct ExamService {
    question_sets: Arc<dyn QuestionSetRepository>,
    results: Arc<dyn ExamResultRepository>,
    policy: GradingPolicy,
}

impl ExamService {
    pub fn new(
        question_sets: Arc<dyn QuestionSetRepository>,
        results: Arc<dyn ExamResultRepository>,
        policy: GradingPolicy,
    ) -> Self {
        Self {
            question_sets,
            results,
            policy,
        }
    }

    /// One stateless HTTP attempt: fetch the caller's set, run a
    /// session over the submitted answers, persist the result. The
    /// empty-answers guard and the stay-collecting-on-failure rule
    /// live in the session.
    pub async fn submit_exam(
        &self,
        user_id: &str,
        question_set_id: &str,
        answers: AnswerMap,
    ) -> AppResult<ExamResult> {
        let set = self.fetch_owned_set(user_id, question_set_id).await?;

        let mut session = ExamSession::new(set, self.policy, self.results.clone());
        session.record_answers(answers)?;

        let result = session.submit().await?;
        log::info!(
            "Exam submitted for set {} by user {}: {}/{} marks",
            question_set_id,
            user_id,
            result.marks_obtained,
            result.total_marks
        );

        Ok(result)
    }

    /// Most recent result for the set, with per-question review rows.
    /// Awards are recomputed from the stored answers; scoring is
    /// deterministic, so the rows always agree with the stored totals.
    pub async fn latest_result_review(
        &self,
        user_id: &str,
        question_set_id: &str,
    ) -> AppResult<ResultReviewResponse> {
        let set = self.fetch_owned_set(user_id, question_set_id).await?;

        let result = self
            .results
            .find_latest_for_set(user_id, question_set_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No result for question set '{}'",
                    question_set_id
                ))
            })?;

        let review = build_review(&set, &result, &self.policy);

        Ok(ResultReviewResponse {
            result: ExamResultResponse::from(&result),
            review,
        })
    }

    async fn fetch_owned_set(&self, user_id: &str, id: &str) -> AppResult<QuestionSet> {
        self.question_sets
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question set with id '{}' not found", id)))
    }
}

fn build_review(
    set: &QuestionSet,
    result: &ExamResult,
    policy: &GradingPolicy,
) -> Vec<QuestionReview> {
    let answers = result.answer_map();
    let summary = ScoringEngine::score(set, &answers, policy);

    set.questions
        .iter()
        .zip(summary.awards)
        .map(|(question, award)| QuestionReview {
            question_id: question.id,
            text: question.text.clone(),
            kind: question.kind,
            marks: question.marks,
            your_answer: answers.get(&question.id).cloned(),
            correct_answer: question.correct_answer.clone(),
            awarded: award.awarded,
        })
        .collect()
}
