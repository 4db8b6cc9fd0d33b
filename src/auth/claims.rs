use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (username, also the quiz session key)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.username.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn username(&self) -> &str {
        &self.sub
    }
}
