use async_trait::async_trait;
use mongodb::{bson::doc, error::ErrorKind, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::User,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.users(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("username_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on users.username");

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(err) if is_duplicate_key(&err) => Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                user.username
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(user)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_error)) => {
            write_error.code == 11000
        }
        _ => false,
    }
}
