#[cfg(test)]
pub mod fixtures {
    use std::collections::BTreeMap;

    use crate::models::domain::question_set::QuestionCounts;
    use crate::models::domain::{Difficulty, Question, QuestionKind, QuestionSet};

    /// MCQ worth one mark with options A through D.
    pub fn mcq_question(id: u32, correct: &str) -> Question {
        let options = BTreeMap::from([
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

    pub fn short_question(id: u32) -> Question {
        Question {
            id,
            text: format!("Short answer question {}", id),
            kind: QuestionKind::Short,
            marks: 2,
            options: None,
            correct_answer: None,
        }
    }

    pub fn medium_question(id: u32) -> Question {
        Question {
            id,
            text: format!("Medium answer question {}", id),
            kind: QuestionKind::Medium,
            marks: 5,
            options: None,
            correct_answer: None,
        }
    }

    pub fn long_question(id: u32) -> Question {
        Question {
            id,
            text: format!("Long answer question {}", id),
            kind: QuestionKind::Long,
            marks: 10,
            options: None,
            correct_answer: None,
        }
    }

    /// Two one-mark MCQs (correct answers A and B) plus one two-mark
    /// short question, for a four-mark set.
    pub fn mixed_question_set(user_id: &str) -> QuestionSet {
        QuestionSet::new(
            user_id,
            "lecture-notes.pdf",
            "0f3db591c2c1a4a3",
            2048,
            "Physics",
            Difficulty::Medium,
            QuestionCounts {
                mcq: 2,
                short: 1,
                medium: 0,
                long: 0,
            },
            vec![
                mcq_question(1, "A"),
                mcq_question(2, "B"),
                short_question(3),
            ],
        )
        .expect("fixture set should validate")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_mcq_question() {
        let question = mcq_question(1, "C");
        assert!(question.validate().is_ok());
        assert_eq!(question.correct_answer.as_deref(), Some("C"));
        assert_eq!(question.options.as_ref().map(|o| o.len()), Some(4));
    }

    #[test]
    fn test_fixtures_subjective_questions() {
        assert!(short_question(1).validate().is_ok());
        assert!(medium_question(2).validate().is_ok());
        assert!(long_question(3).validate().is_ok());
        assert_eq!(long_question(3).marks, 10);
    }

    #[test]
    fn test_fixtures_mixed_question_set() {
        let set = mixed_question_set("user-1");
        assert_eq!(set.total_questions, 3);
        assert_eq!(set.total_marks, 4);
        assert_eq!(set.user_id, "user-1");
    }
}
