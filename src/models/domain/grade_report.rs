use serde::{Deserialize, Serialize};

use crate::models::domain::question::Answer;

/// Outcome of one grading pass. Derived from a quiz and a submission, never stored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradeReport {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub passed: bool,
    pub details: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub id: String,
    pub prompt: String,
    pub user_answer: String,
    pub gold_answer: Answer,
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
