use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{ExamResult, QuestionSet, SubmittedAnswer};
use crate::repositories::ExamResultRepository;
use crate::services::scoring::{AnswerMap, GradingPolicy, ScoringEngine};

/// Where a session stands. `Completed` is terminal; a retake needs a
/// fresh session built from a re-fetched question set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExamSessionState {
    Collecting,
    Completed { result_id: String },
}

/// One exam attempt: collects answers, scores on submit, and writes
/// the result through the injected result store. The submitting phase
/// lives inside the `submit` call; the session only leaves
/// `Collecting` once the result is durably persisted, so a failed
/// write keeps every recorded answer for a manual retry.
pub struct ExamSession {
    set: QuestionSet,
    policy: GradingPolicy,
    answers: AnswerMap,
    state: ExamSessionState,
    results: Arc<dyn ExamResultRepository>,
}

impl ExamSession {
    pub fn new(
        set: QuestionSet,
        policy: GradingPolicy,
        results: Arc<dyn ExamResultRepository>,
    ) -> Self {
        Self {
            set,
            policy,
            answers: AnswerMap::new(),
            state: ExamSessionState::Collecting,
            results,
        }
    }

    pub fn state(&self) -> &ExamSessionState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Records or overwrites one answer. Ids the set does not contain
    /// are accepted and simply ignored by scoring.
    pub fn record_answer(&mut self, question_id: u32, value: impl Into<String>) -> AppResult<()> {
        if matches!(self.state, ExamSessionState::Completed { .. }) {
            return Err(AppError::ValidationError(
                "Exam session is already submitted".to_string(),
            ));
        }
        self.answers.insert(question_id, value.into());
        Ok(())
    }

    pub fn record_answers(&mut self, answers: AnswerMap) -> AppResult<()> {
        for (question_id, value) in answers {
            self.record_answer(question_id, value)?;
        }
        Ok(())
    }

    /// Scores the collected answers and persists the result. Refuses
    /// an empty answer map before scoring is ever invoked. On a
    /// persistence failure the session stays in `Collecting` with the
    /// answers intact and the error surfaces for a manual retry.
    pub async fn submit(&mut self) -> AppResult<ExamResult> {
        if matches!(self.state, ExamSessionState::Completed { .. }) {
            return Err(AppError::ValidationError(
                "Exam session is already submitted".to_string(),
            ));
        }
        if self.answers.is_empty() {
            return Err(AppError::ValidationError(
                "Cannot submit an exam with no answers".to_string(),
            ));
        }

        let summary = ScoringEngine::score(&self.set, &self.answers, &self.policy);

        let submitted = self
            .answers
            .iter()
            .map(|(question_id, answer)| SubmittedAnswer {
                question_id: *question_id,
                answer: answer.clone(),
            })
            .collect();

        let candidate = ExamResult::new(
            &self.set.user_id,
            &self.set.id,
            summary.total_questions,
            summary.total_marks,
            summary.marks_obtained,
            summary.percentage,
            submitted,
        );

        let persisted = self.results.insert(candidate).await?;

        self.state = ExamSessionState::Completed {
            result_id: persisted.id.clone(),
        };

        Ok(persisted)
    }
}
