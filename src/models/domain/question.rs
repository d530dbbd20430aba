use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Closed set of question kinds. The tag decides the scoring policy:
/// `Mcq` is graded by exact option-key match, everything else by
/// presence of a non-empty answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Mcq,
    #[serde(alias = "2_mark")]
    Short,
    #[serde(alias = "5_mark")]
    Medium,
    #[serde(alias = "10_mark")]
    Long,
}

impl QuestionKind {
    /// Marks conventionally carried by this kind (1/2/5/10).
    pub fn canonical_marks(&self) -> u32 {
        match self {
            QuestionKind::Mcq => 1,
            QuestionKind::Short => 2,
            QuestionKind::Medium => 5,
            QuestionKind::Long => 10,
        }
    }

    pub fn is_subjective(&self) -> bool {
        !matches!(self, QuestionKind::Mcq)
    }
}

/// A single generated question, immutable once validated. `options`
/// and `correct_answer` are carried only by `Mcq`; the option map is
/// ordered by key so choices render in a stable A/B/C/D order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub marks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

impl Question {
    /// Per-kind shape rules, checked once at ingestion. Anything that
    /// passes here is safe for the scoring engine to consume blindly.
    pub fn validate(&self) -> AppResult<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Question {} has empty text",
                self.id
            )));
        }
        if self.marks == 0 {
            return Err(AppError::ValidationError(format!(
                "Question {} has zero marks",
                self.id
            )));
        }

        match self.kind {
            QuestionKind::Mcq => {
                let options = self.options.as_ref().ok_or_else(|| {
                    AppError::ValidationError(format!("MCQ question {} has no options", self.id))
                })?;
                if options.is_empty() {
                    return Err(AppError::ValidationError(format!(
                        "MCQ question {} has an empty option map",
                        self.id
                    )));
                }
                let correct = self.correct_answer.as_ref().ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "MCQ question {} has no correct answer",
                        self.id
                    ))
                })?;
                if !options.contains_key(correct) {
                    return Err(AppError::ValidationError(format!(
                        "MCQ question {}: correct answer '{}' is not an option key",
                        self.id, correct
                    )));
                }
            }
            _ => {
                if self.options.is_some() {
                    return Err(AppError::ValidationError(format!(
                        "Non-MCQ question {} carries options",
                        self.id
                    )));
                }
                if self.correct_answer.is_some() {
                    return Err(AppError::ValidationError(format!(
                        "Non-MCQ question {} carries a correct answer",
                        self.id
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_mcq(id: u32) -> Question {
        let mut options = BTreeMap::new();
        options.insert("A".to_string(), "Paris".to_string());
        options.insert("B".to_string(), "Lyon".to_string());
        Question {
            id,
            text: "Capital of France?".to_string(),
            kind: QuestionKind::Mcq,
            marks: 1,
            options: Some(options),
            correct_answer: Some("A".to_string()),
        }
    }

    fn make_short(id: u32) -> Question {
        Question {
            id,
            text: "Define entropy.".to_string(),
            kind: QuestionKind::Short,
            marks: 2,
            options: None,
            correct_answer: None,
        }
    }

    #[test]
    fn question_kind_round_trip_serialization() {
        let variants = [
            QuestionKind::Mcq,
            QuestionKind::Short,
            QuestionKind::Medium,
            QuestionKind::Long,
        ];

        for variant in variants {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: QuestionKind =
                serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn question_kind_serializes_lowercase() {
        let json = serde_json::to_string(&QuestionKind::Mcq).unwrap();
        assert_eq!(json, "\"mcq\"");
        let json = serde_json::to_string(&QuestionKind::Long).unwrap();
        assert_eq!(json, "\"long\"");
    }

    #[test]
    fn question_serializes_kind_under_the_type_key() {
        let json = serde_json::to_string(&make_mcq(1)).unwrap();
        assert!(json.contains("\"type\":\"mcq\""));
        assert!(!json.contains("\"kind\""));

        let wire = r#"{
            "id": 2,
            "text": "Define entropy.",
            "type": "2_mark",
            "marks": 2
        }"#;
        let parsed: Question = serde_json::from_str(wire).unwrap();
        assert_eq!(parsed.kind, QuestionKind::Short);
        assert!(parsed.options.is_none());
    }

    #[test]
    fn question_kind_accepts_marks_based_aliases() {
        assert_eq!(
            serde_json::from_str::<QuestionKind>("\"2_mark\"").unwrap(),
            QuestionKind::Short
        );
        assert_eq!(
            serde_json::from_str::<QuestionKind>("\"5_mark\"").unwrap(),
            QuestionKind::Medium
        );
        assert_eq!(
            serde_json::from_str::<QuestionKind>("\"10_mark\"").unwrap(),
            QuestionKind::Long
        );
    }

    #[test]
    fn question_kind_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<QuestionKind>("\"essay\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn canonical_marks_per_kind() {
        assert_eq!(QuestionKind::Mcq.canonical_marks(), 1);
        assert_eq!(QuestionKind::Short.canonical_marks(), 2);
        assert_eq!(QuestionKind::Medium.canonical_marks(), 5);
        assert_eq!(QuestionKind::Long.canonical_marks(), 10);
    }

    #[test]
    fn valid_mcq_passes_validation() {
        assert!(make_mcq(1).validate().is_ok());
    }

    #[test]
    fn valid_subjective_passes_validation() {
        assert!(make_short(1).validate().is_ok());
    }

    #[test]
    fn mcq_without_options_fails_validation() {
        let mut q = make_mcq(1);
        q.options = None;
        assert!(matches!(q.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn mcq_with_empty_options_fails_validation() {
        let mut q = make_mcq(1);
        q.options = Some(BTreeMap::new());
        assert!(matches!(q.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn mcq_without_correct_answer_fails_validation() {
        let mut q = make_mcq(1);
        q.correct_answer = None;
        assert!(matches!(q.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn mcq_with_correct_answer_outside_options_fails_validation() {
        let mut q = make_mcq(1);
        q.correct_answer = Some("Z".to_string());
        assert!(matches!(q.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn subjective_with_options_fails_validation() {
        let mut q = make_short(1);
        q.options = Some(BTreeMap::from([("A".to_string(), "x".to_string())]));
        assert!(matches!(q.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn zero_marks_fails_validation() {
        let mut q = make_short(1);
        q.marks = 0;
        assert!(matches!(q.validate(), Err(AppError::ValidationError(_))));
    }
}
