use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::QuizSession};

/// Per-user quiz slot. Sessions are read and written as whole values.
#[async_trait]
pub trait QuizSessionRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<QuizSession>>;
    async fn save(&self, session: QuizSession) -> AppResult<QuizSession>;
}

pub struct MongoQuizSessionRepository {
    collection: Collection<QuizSession>,
}

impl MongoQuizSessionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.sessions(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz sessions collection");

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("session_username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(username_index).await?;

        log::info!("Successfully created indexes for quiz sessions collection");
        Ok(())
    }
}

#[async_trait]
impl QuizSessionRepository for MongoQuizSessionRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<QuizSession>> {
        let session = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(session)
    }

    async fn save(&self, session: QuizSession) -> AppResult<QuizSession> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "username": &session.username }, &session)
            .with_options(options)
            .await?;

        Ok(session)
    }
}
