use std::{collections::HashMap, sync::Arc};

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{HistoryEntry, Quiz, QuizSession},
        dto::{
            request::GenerateQuizRequest,
            response::{BadgeView, CatalogResponse, QuizView, SubmissionResponse},
        },
    },
    repositories::QuizSessionRepository,
    services::{
        badge_service::BadgeService, generation_request::GenerationRequest,
        grading_service::GradingService, model_service::CompletionProvider,
    },
};

/// Drives one quiz-taking cycle: generate, display, grade, record.
pub struct QuizService {
    model: Arc<dyn CompletionProvider>,
    sessions: Arc<dyn QuizSessionRepository>,
}

impl QuizService {
    pub fn new(
        model: Arc<dyn CompletionProvider>,
        sessions: Arc<dyn QuizSessionRepository>,
    ) -> Self {
        Self { model, sessions }
    }

    pub fn catalog(&self) -> CatalogResponse {
        CatalogResponse::default()
    }

    /// Asks the provider for a quiz and makes it the caller's active quiz.
    ///
    /// The stored session is only touched once the provider output has passed
    /// validation, so a failed generation keeps whatever quiz was there before.
    pub async fn generate(&self, username: &str, request: &GenerateQuizRequest) -> AppResult<QuizView> {
        request.validate()?;

        let params = request.to_params();
        let generation = GenerationRequest::build(&params)?;

        log::info!(
            "Generating {} {} question(s) on '{}' for {}",
            generation.contract.count(),
            params.difficulty,
            params.topic,
            username
        );

        let raw = self
            .model
            .complete(&generation)
            .await?
            .ok_or(AppError::EmptyGeneration)?;

        let quiz = generation.contract.validate_json(&raw).map_err(|err| {
            log::warn!("Rejected model output for {}: {}", username, err);
            err
        })?;

        let view = QuizView::from(&quiz);
        let session = self.load_session(username).await?.with_quiz(quiz);
        self.sessions.save(session).await?;

        Ok(view)
    }

    pub async fn active_quiz(&self, username: &str) -> AppResult<QuizView> {
        let quiz = self.require_active_quiz(username).await?;
        Ok(QuizView::from(&quiz))
    }

    /// Grades the active quiz. The quiz stays active so it can be retaken.
    pub async fn submit(
        &self,
        username: &str,
        answers: &HashMap<String, String>,
    ) -> AppResult<SubmissionResponse> {
        let session = self.load_session(username).await?;
        let quiz = session.active_quiz.clone().ok_or(AppError::NoActiveQuiz)?;

        let report = GradingService::grade(&quiz, answers);
        let badge = BadgeService::render(report.percentage, report.passed);

        log::info!(
            "{} scored {}/{} ({:.1}%) on '{}'",
            username,
            report.correct,
            report.total,
            report.percentage,
            quiz.topic
        );

        let session = session.with_history_entry(HistoryEntry::from_report(&quiz, &report));
        let session = self.sessions.save(session).await?;

        Ok(SubmissionResponse {
            result: report,
            badge: BadgeView::from(&badge),
            history: session.history,
        })
    }

    pub async fn history(&self, username: &str) -> AppResult<Vec<HistoryEntry>> {
        Ok(self.load_session(username).await?.history)
    }

    async fn require_active_quiz(&self, username: &str) -> AppResult<Quiz> {
        self.load_session(username)
            .await?
            .active_quiz
            .ok_or(AppError::NoActiveQuiz)
    }

    async fn load_session(&self, username: &str) -> AppResult<QuizSession> {
        Ok(self
            .sessions
            .find_by_username(username)
            .await?
            .unwrap_or_else(|| QuizSession::new(username)))
    }
}
