use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    pub answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl QuestionType {
    /// Canonical order, used for the catalog and for the allowed-type enum.
    pub const ALL: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::ShortAnswer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TrueFalse => "true_false",
            QuestionType::ShortAnswer => "short_answer",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown question type '{}'", s))
    }
}

/// Gold answer: free text (multiple choice, short answer) or a boolean (true/false).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Text(String),
}

impl Answer {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::Flag(value) => Some(*value),
            Answer::Text(_) => None,
        }
    }

    /// Text form used for string comparisons; booleans render as `true`/`false`.
    pub fn as_text(&self) -> String {
        match self {
            Answer::Flag(value) => value.to_string(),
            Answer::Text(text) => text.clone(),
        }
    }
}
