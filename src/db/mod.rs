use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{QuizSession, User},
};

/// Handle on the quiz database and the two collections it keeps.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
    users_collection: String,
    sessions_collection: String,
}

impl Database {
    /// Connects and pings before handing out collections, so a bad
    /// connection string fails at startup rather than on the first request.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_conn_string).await?;

        client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        client
            .database(&config.mongo_db_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!(
            "Connected to MongoDB database '{}' (users: '{}', sessions: '{}')",
            config.mongo_db_name,
            config.users_collection,
            config.sessions_collection
        );

        Ok(Self::from_client(client, config))
    }

    /// Wraps an existing client without checking the server.
    pub fn from_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            db_name: config.mongo_db_name.clone(),
            users_collection: config.users_collection.clone(),
            sessions_collection: config.sessions_collection.clone(),
        }
    }

    pub fn users(&self) -> Collection<User> {
        self.client
            .database(&self.db_name)
            .collection(&self.users_collection)
    }

    pub fn sessions(&self) -> Collection<QuizSession> {
        self.client
            .database(&self.db_name)
            .collection(&self.sessions_collection)
    }
}
