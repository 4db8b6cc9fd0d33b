use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::{
    constants::quiz_prompt::DEFAULT_QUESTION_COUNT,
    models::domain::{Difficulty, QuestionType},
    services::{
        generation_request::GenerationParams,
        quiz_contract::{MAX_QUESTIONS, MIN_QUESTIONS},
    },
};

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 50),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must be alphanumeric with underscores"
        )
    )]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Count as typed into the form: a number, or text that may not parse.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CountInput {
    Number(i64),
    Text(String),
}

impl CountInput {
    /// Unparsable input falls back to the default; anything else is clamped.
    pub fn resolve(&self) -> usize {
        let requested = match self {
            CountInput::Number(n) => Some(*n),
            CountInput::Text(text) => text.trim().parse::<i64>().ok(),
        };

        match requested {
            Some(n) => n.clamp(MIN_QUESTIONS as i64, MAX_QUESTIONS as i64) as usize,
            None => DEFAULT_QUESTION_COUNT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(max = 200), custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub count: Option<CountInput>,

    /// Question type names to leave out. Unknown names are ignored.
    #[serde(default)]
    pub omit: Vec<String>,
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(
            ValidationError::new("blank_topic").with_message("Topic must not be blank".into()),
        );
    }
    Ok(())
}

impl GenerateQuizRequest {
    pub fn to_params(&self) -> GenerationParams {
        let count = self
            .count
            .as_ref()
            .map(CountInput::resolve)
            .unwrap_or(DEFAULT_QUESTION_COUNT);
        let omit = self
            .omit
            .iter()
            .filter_map(|name| name.trim().parse::<QuestionType>().ok());

        GenerationParams::new(self.topic.trim(), self.difficulty.unwrap_or_default())
            .with_count(count)
            .with_omitted(omit)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubmitAnswersRequest {
    /// Question id to raw answer. Any JSON value is accepted here.
    #[serde(default)]
    pub answers: HashMap<String, Value>,
}

impl SubmitAnswersRequest {
    /// Scalars become their text form; nulls, arrays and objects become `""`.
    pub fn raw_answers(&self) -> HashMap<String, String> {
        self.answers
            .iter()
            .map(|(id, value)| {
                let raw = match value {
                    Value::String(text) => text.clone(),
                    Value::Bool(flag) => flag.to_string(),
                    Value::Number(number) => number.to_string(),
                    _ => String::new(),
                };
                (id.clone(), raw)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "jane_doe".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_chars = RegisterRequest {
            username: "jane doe!".to_string(),
            password: "secret".to_string(),
        };
        assert!(bad_chars.validate().is_err());

        let too_short = RegisterRequest {
            username: "jd".to_string(),
            password: "secret".to_string(),
        };
        assert!(too_short.validate().is_err());

        let no_password = RegisterRequest {
            username: "jane_doe".to_string(),
            password: String::new(),
        };
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn test_count_input_resolution() {
        assert_eq!(CountInput::Number(15).resolve(), 15);
        assert_eq!(CountInput::Number(0).resolve(), 1);
        assert_eq!(CountInput::Number(-3).resolve(), 1);
        assert_eq!(CountInput::Number(1000).resolve(), 60);
        assert_eq!(CountInput::Text(" 25 ".to_string()).resolve(), 25);
        assert_eq!(CountInput::Text("lots".to_string()).resolve(), 10);
    }

    #[test]
    fn test_generate_request_rejects_blank_topic() {
        let blank: GenerateQuizRequest = serde_json::from_str(r#"{"topic":"   "}"#).unwrap();
        assert!(blank.validate().is_err());

        let empty: GenerateQuizRequest = serde_json::from_str(r#"{"topic":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let padded: GenerateQuizRequest = serde_json::from_str(r#"{"topic":" AWS "}"#).unwrap();
        assert!(padded.validate().is_ok());
    }

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateQuizRequest = serde_json::from_str(r#"{"topic":"  Docker  "}"#).unwrap();
        let params = request.to_params();

        assert_eq!(params.topic, "Docker");
        assert_eq!(params.difficulty, Difficulty::Beginner);
        assert_eq!(params.count, DEFAULT_QUESTION_COUNT);
        assert!(params.omit.is_empty());
    }

    #[test]
    fn test_generate_request_parses_form_values() {
        let request: GenerateQuizRequest = serde_json::from_str(
            r#"{"topic":"AWS","difficulty":"advanced","count":"12","omit":["true_false","essay"]}"#,
        )
        .unwrap();
        let params = request.to_params();

        assert_eq!(params.difficulty, Difficulty::Advanced);
        assert_eq!(params.count, 12);
        assert_eq!(params.omit, vec![QuestionType::TrueFalse]);
    }

    #[test]
    fn test_generate_request_rejects_unknown_difficulty() {
        let parsed = serde_json::from_str::<GenerateQuizRequest>(
            r#"{"topic":"AWS","difficulty":"expert"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_submit_request_defaults_to_no_answers() {
        let request: SubmitAnswersRequest = serde_json::from_str("{}").unwrap();
        assert!(request.answers.is_empty());
    }

    #[test]
    fn test_submit_request_accepts_any_answer_value() {
        let request: SubmitAnswersRequest = serde_json::from_str(
            r#"{"answers":{"q1":true,"q2":"bash","q3":42,"q4":null,"q5":["a"],"q6":{"x":1}}}"#,
        )
        .unwrap();
        let raw = request.raw_answers();

        assert_eq!(raw["q1"], "true");
        assert_eq!(raw["q2"], "bash");
        assert_eq!(raw["q3"], "42");
        assert_eq!(raw["q4"], "");
        assert_eq!(raw["q5"], "");
        assert_eq!(raw["q6"], "");
    }
}
