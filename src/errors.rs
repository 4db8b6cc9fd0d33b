use actix_web::{
    http::{header::LOCATION, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;
use thiserror::Error;

/// Where the client goes to start a new quiz.
pub const GENERATION_ENTRY_POINT: &str = "/api/quiz/catalog";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Please allow at least one question type.")]
    NoAllowedTypes,

    #[error("Model returned no content.")]
    EmptyGeneration,

    #[error("Model output invalid: {0}")]
    SchemaViolation(String),

    #[error("No active quiz. Generate a quiz first.")]
    NoActiveQuiz,

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NoAllowedTypes => "NO_ALLOWED_TYPES",
            AppError::EmptyGeneration => "EMPTY_GENERATION",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::NoActiveQuiz => "NO_ACTIVE_QUIZ",
            AppError::ModelError(_) => "MODEL_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Quiz-flow failures send the user back to the generation form.
    fn redirect(&self) -> Option<&'static str> {
        match self {
            AppError::NoAllowedTypes
            | AppError::EmptyGeneration
            | AppError::SchemaViolation(_)
            | AppError::NoActiveQuiz => Some(GENERATION_ENTRY_POINT),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoAllowedTypes => StatusCode::BAD_REQUEST,
            AppError::EmptyGeneration => StatusCode::BAD_GATEWAY,
            AppError::SchemaViolation(_) => StatusCode::BAD_GATEWAY,
            AppError::NoActiveQuiz => StatusCode::SEE_OTHER,
            AppError::ModelError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let (true, Some(location)) = (self.status_code().is_redirection(), self.redirect()) {
            builder.insert_header((LOCATION, location));
        }
        builder.json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            status: self.status_code().as_u16(),
            redirect: self.redirect(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelError(err.to_string())
    }
}
impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::InternalError(format!("Password hashing failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
