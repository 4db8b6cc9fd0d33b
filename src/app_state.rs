use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuizSessionRepository, MongoUserRepository, QuizSessionRepository, UserRepository,
    },
    services::{CompletionProvider, OpenAiModelService, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let session_repository = Arc::new(MongoQuizSessionRepository::new(&db));
        session_repository.ensure_indexes().await?;

        let model = Arc::new(OpenAiModelService::new(&config));
        log::info!("Using model '{}' for quiz generation", config.openai_model);

        Ok(Self::from_parts(
            config,
            user_repository,
            session_repository,
            model,
        ))
    }

    /// Wires the services over already-built collaborators.
    pub fn from_parts(
        config: Config,
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn QuizSessionRepository>,
        model: Arc<dyn CompletionProvider>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Self {
            user_service: Arc::new(UserService::new(users, jwt_service.clone())),
            quiz_service: Arc::new(QuizService::new(model, sessions)),
            jwt_service,
            config: Arc::new(config),
        }
    }
}
