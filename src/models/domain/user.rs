use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> Self {
        User {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
