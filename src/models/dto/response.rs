use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    constants::quiz_prompt::{DEFAULT_QUESTION_COUNT, TOPICS},
    models::domain::{Difficulty, GradeReport, HistoryEntry, Question, QuestionType, Quiz, User},
    services::{
        badge_service::Badge,
        quiz_contract::{MAX_QUESTIONS, MIN_QUESTIONS},
    },
};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

pub type RegisterResponse = ApiResponse<UserDto>;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub expires_in_hours: i64,
}

/// Everything the generation form needs to render its controls.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub topics: Vec<&'static str>,
    pub types: Vec<QuestionType>,
    pub difficulties: Vec<Difficulty>,
    pub min_count: usize,
    pub max_count: usize,
    pub default_count: usize,
}

impl Default for CatalogResponse {
    fn default() -> Self {
        CatalogResponse {
            topics: TOPICS.to_vec(),
            types: QuestionType::ALL.to_vec(),
            difficulties: Difficulty::ALL.to_vec(),
            min_count: MIN_QUESTIONS,
            max_count: MAX_QUESTIONS,
            default_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// A question as shown while the quiz is being taken: no answer, no explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id.clone(),
            question_type: question.question_type,
            prompt: question.prompt.clone(),
            choices: question.choices.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizView {
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionView>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        QuizView {
            topic: quiz.topic.clone(),
            difficulty: quiz.difficulty,
            questions: quiz.questions.iter().map(QuestionView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeView {
    pub pct: u8,
    pub passed: bool,
    pub data_uri: String,
}

impl From<&Badge> for BadgeView {
    fn from(badge: &Badge) -> Self {
        BadgeView {
            pct: badge.pct,
            passed: badge.passed,
            data_uri: badge.data_uri(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub result: GradeReport,
    pub badge: BadgeView,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}
