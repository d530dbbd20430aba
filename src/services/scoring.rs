use std::collections::BTreeMap;

use crate::models::domain::question::{Question, QuestionKind};
use crate::models::domain::QuestionSet;

/// Answers keyed by question id. May be partial; ids not present in
/// the question set are ignored.
pub type AnswerMap = BTreeMap<u32, String>;

/// Named scoring knobs. `subjective_credit` is the fraction of a
/// subjective question's marks awarded for any non-empty answer, 0.7
/// by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradingPolicy {
    pub subjective_credit: f64,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            subjective_credit: 0.7,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionAward {
    pub question_id: u32,
    pub awarded: f64,
}

/// Deterministic outcome of scoring one answer map against one
/// question set. `percentage` is `None` exactly when the set carries
/// zero total marks; callers must surface that as ungradable, never
/// as 0%.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSummary {
    pub total_questions: u32,
    pub total_marks: u32,
    pub marks_obtained: f64,
    pub percentage: Option<f64>,
    pub awards: Vec<QuestionAward>,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Pure scoring pass over the set, in question order. Persistence
    /// and state handling belong to the caller.
    pub fn score(set: &QuestionSet, answers: &AnswerMap, policy: &GradingPolicy) -> ScoreSummary {
        let total_marks: u32 = set.questions.iter().map(|q| q.marks).sum();

        let mut marks_obtained = 0.0;
        let mut awards = Vec::with_capacity(set.questions.len());

        for question in &set.questions {
            let answer = answers.get(&question.id).map(String::as_str);
            let awarded = Self::award(question, answer, policy);
            marks_obtained += awarded;
            awards.push(QuestionAward {
                question_id: question.id,
                awarded,
            });
        }

        let percentage = if total_marks > 0 {
            Some(marks_obtained / total_marks as f64 * 100.0)
        } else {
            None
        };

        ScoreSummary {
            total_questions: set.questions.len() as u32,
            total_marks,
            marks_obtained,
            percentage,
            awards,
        }
    }

    /// MCQ: full marks for an exact, case-sensitive match against the
    /// correct option key. Subjective: the policy credit for any
    /// non-empty answer; no semantic grading.
    fn award(question: &Question, answer: Option<&str>, policy: &GradingPolicy) -> f64 {
        match question.kind {
            QuestionKind::Mcq => match (answer, question.correct_answer.as_deref()) {
                (Some(given), Some(correct)) if given == correct => question.marks as f64,
                _ => 0.0,
            },
            _ => match answer {
                Some(given) if !given.is_empty() => policy.subjective_credit * question.marks as f64,
                _ => 0.0,
            },
        }
    }
}
