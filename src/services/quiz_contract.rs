use std::collections::HashSet;

use serde_json::{json, Value};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Answer, Difficulty, Question, QuestionType, Quiz},
};

pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 60;
pub const MIN_CHOICES: usize = 3;
pub const MAX_CHOICES: usize = 5;

pub const SCHEMA_NAME: &str = "quiz_schema";

/// Shape of a well-formed quiz for one generation request.
///
/// The same value drives validation of provider output and the response-format
/// schema sent to the provider, so the two cannot drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizContract {
    count: usize,
    allowed_types: Vec<QuestionType>,
}

impl QuizContract {
    pub fn new(count: usize, allowed_types: Vec<QuestionType>) -> AppResult<Self> {
        if allowed_types.is_empty() {
            return Err(AppError::NoAllowedTypes);
        }
        Ok(Self {
            count: count.clamp(MIN_QUESTIONS, MAX_QUESTIONS),
            allowed_types,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn allowed_types(&self) -> &[QuestionType] {
        &self.allowed_types
    }

    /// Parses raw provider content and validates it.
    pub fn validate_json(&self, raw: &str) -> AppResult<Quiz> {
        let quiz: Quiz = serde_json::from_str(raw)
            .map_err(|e| AppError::SchemaViolation(e.to_string()))?;
        self.validate(quiz)
    }

    /// All-or-nothing: the quiz comes back unchanged or not at all.
    pub fn validate(&self, quiz: Quiz) -> AppResult<Quiz> {
        if quiz.topic.trim().is_empty() {
            return Err(violation("topic must not be empty"));
        }

        if quiz.questions.len() != self.count {
            return Err(violation(format!(
                "expected {} questions, got {}",
                self.count,
                quiz.questions.len()
            )));
        }

        let mut seen_ids = HashSet::new();
        for question in &quiz.questions {
            if !seen_ids.insert(question.id.as_str()) {
                return Err(violation(format!("duplicate question id '{}'", question.id)));
            }
            self.validate_question(question)?;
        }

        Ok(quiz)
    }

    fn validate_question(&self, question: &Question) -> AppResult<()> {
        let id = &question.id;

        if !self.allowed_types.contains(&question.question_type) {
            return Err(violation(format!(
                "question '{}' has type '{}' which is not allowed",
                id, question.question_type
            )));
        }

        if question.prompt.trim().is_empty() {
            return Err(violation(format!("question '{}' has an empty prompt", id)));
        }

        match (question.question_type, &question.answer) {
            (QuestionType::MultipleChoice, Answer::Text(answer)) => {
                let choices = question.choices.as_deref().unwrap_or_default();
                if !(MIN_CHOICES..=MAX_CHOICES).contains(&choices.len()) {
                    return Err(violation(format!(
                        "question '{}' needs {}-{} choices, got {}",
                        id,
                        MIN_CHOICES,
                        MAX_CHOICES,
                        choices.len()
                    )));
                }
                if !choices.iter().any(|choice| choice == answer) {
                    return Err(violation(format!(
                        "question '{}' answer does not match any choice",
                        id
                    )));
                }
            }
            (QuestionType::TrueFalse, Answer::Flag(_)) => {}
            (QuestionType::ShortAnswer, Answer::Text(_)) => {}
            (QuestionType::TrueFalse, Answer::Text(_)) => {
                return Err(violation(format!(
                    "question '{}' is true_false but its answer is not a boolean",
                    id
                )));
            }
            (_, Answer::Flag(_)) => {
                return Err(violation(format!(
                    "question '{}' is {} but its answer is a boolean",
                    id, question.question_type
                )));
            }
        }

        Ok(())
    }

    /// Response-format payload (`name` + JSON schema) for the provider.
    pub fn json_schema(&self) -> Value {
        let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
        let types: Vec<&str> = self.allowed_types.iter().map(|t| t.as_str()).collect();

        json!({
            "name": SCHEMA_NAME,
            "schema": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "topic": { "type": "string" },
                    "difficulty": { "type": "string", "enum": difficulties },
                    "questions": {
                        "type": "array",
                        "minItems": self.count,
                        "maxItems": self.count,
                        "items": {
                            "type": "object",
                            "additionalProperties": false,
                            "properties": {
                                "id": { "type": "string" },
                                "type": { "type": "string", "enum": types },
                                "prompt": { "type": "string" },
                                "choices": { "type": "array", "items": { "type": "string" } },
                                "answer": { "anyOf": [{ "type": "string" }, { "type": "boolean" }] },
                                "explanation": { "type": "string" }
                            },
                            "required": ["id", "type", "prompt", "answer"]
                        }
                    }
                },
                "required": ["topic", "difficulty", "questions"]
            }
        })
    }
}

fn violation(reason: impl Into<String>) -> AppError {
    AppError::SchemaViolation(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{multiple_choice, sample_quiz, sample_quiz_json, true_false};

    fn contract(count: usize) -> QuizContract {
        QuizContract::new(count, QuestionType::ALL.to_vec()).unwrap()
    }

    fn assert_violation(result: AppResult<Quiz>, needle: &str) {
        match result {
            Err(AppError::SchemaViolation(reason)) => {
                assert!(reason.contains(needle), "unexpected reason: {}", reason)
            }
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_quiz_round_trips_unchanged() {
        let quiz = contract(3).validate_json(&sample_quiz_json()).unwrap();
        assert_eq!(quiz, sample_quiz());
    }

    #[test]
    fn rejects_question_count_mismatch() {
        assert_violation(
            contract(4).validate_json(&sample_quiz_json()),
            "expected 4 questions, got 3",
        );
    }

    #[test]
    fn rejects_unknown_question_type() {
        let raw = sample_quiz_json().replace("short_answer", "essay");
        assert!(matches!(
            contract(3).validate_json(&raw),
            Err(AppError::SchemaViolation(_))
        ));
    }

    #[test]
    fn rejects_type_outside_allowed_set() {
        let contract =
            QuizContract::new(3, vec![QuestionType::MultipleChoice, QuestionType::TrueFalse])
                .unwrap();
        assert_violation(contract.validate(sample_quiz()), "not allowed");
    }

    #[test]
    fn rejects_unknown_difficulty_and_missing_fields() {
        let raw = sample_quiz_json().replace("intermediate", "expert");
        assert!(contract(3).validate_json(&raw).is_err());

        let raw = r#"{"topic":"Git","questions":[]}"#;
        assert_violation(contract(1).validate_json(raw), "difficulty");
    }

    #[test]
    fn rejects_non_string_non_boolean_answer() {
        let raw = r#"{"topic":"Git","difficulty":"beginner","questions":[
            {"id":"q1","type":"short_answer","prompt":"Default branch?","answer":42}
        ]}"#;
        assert!(contract(1).validate_json(raw).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            contract(1).validate_json("{not json"),
            Err(AppError::SchemaViolation(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut quiz = sample_quiz();
        quiz.questions[1].id = "q1".to_string();
        assert_violation(contract(3).validate(quiz), "duplicate question id 'q1'");
    }

    #[test]
    fn rejects_empty_topic_and_prompt() {
        let mut quiz = sample_quiz();
        quiz.topic = "  ".to_string();
        assert_violation(contract(3).validate(quiz), "topic");

        let mut quiz = sample_quiz();
        quiz.questions[2].prompt = String::new();
        assert_violation(contract(3).validate(quiz), "empty prompt");
    }

    #[test]
    fn true_false_gold_must_be_boolean() {
        let mut question = true_false("q1", true);
        question.answer = Answer::Text("yes".to_string());
        let quiz = Quiz {
            topic: "Linux".to_string(),
            difficulty: Difficulty::Beginner,
            questions: vec![question],
        };
        assert_violation(contract(1).validate(quiz), "not a boolean");
    }

    #[test]
    fn multiple_choice_answer_must_be_one_of_the_choices() {
        let quiz = Quiz {
            topic: "AWS".to_string(),
            difficulty: Difficulty::Beginner,
            questions: vec![multiple_choice("q1", "D")],
        };
        assert_violation(contract(1).validate(quiz), "does not match any choice");
    }

    #[test]
    fn multiple_choice_needs_three_to_five_choices() {
        let mut question = multiple_choice("q1", "A");
        question.choices = Some(vec!["A".to_string(), "B".to_string()]);
        let quiz = Quiz {
            topic: "AWS".to_string(),
            difficulty: Difficulty::Beginner,
            questions: vec![question],
        };
        assert_violation(contract(1).validate(quiz), "needs 3-5 choices, got 2");
    }

    #[test]
    fn new_clamps_count_and_refuses_empty_type_set() {
        assert_eq!(contract(0).count(), MIN_QUESTIONS);
        assert_eq!(contract(500).count(), MAX_QUESTIONS);
        assert!(matches!(
            QuizContract::new(5, vec![]),
            Err(AppError::NoAllowedTypes)
        ));
    }

    #[test]
    fn json_schema_is_parameterized_by_count_and_types() {
        let contract = QuizContract::new(7, vec![QuestionType::TrueFalse]).unwrap();
        let schema = contract.json_schema();

        assert_eq!(schema["name"], SCHEMA_NAME);
        let questions = &schema["schema"]["properties"]["questions"];
        assert_eq!(questions["minItems"], 7);
        assert_eq!(questions["maxItems"], 7);
        assert_eq!(
            questions["items"]["properties"]["type"]["enum"],
            json!(["true_false"])
        );
        assert_eq!(
            schema["schema"]["properties"]["difficulty"]["enum"],
            json!(["beginner", "intermediate", "advanced"])
        );
    }
}
