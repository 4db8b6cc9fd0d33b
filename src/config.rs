use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEV_JWT_SECRET: &str = "dev_secret_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub users_collection: String,
    pub sessions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_timeout_secs: u64,
    pub cors_allowed_origin: String,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "certquiz-local".to_string()),
            users_collection: env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string()),
            sessions_collection: env::var("SESSIONS_COLLECTION")
                .unwrap_or_else(|_| "quiz_sessions".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE").ok().filter(|b| !b.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            openai_timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Refuses to start in production with development secrets or without a model key.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEV_JWT_SECRET {
            return Err(AppError::ValidationError(
                "JWT_SECRET is using the default value; set it to a secure random string"
                    .to_string(),
            ));
        }

        if jwt_secret.len() < 32 {
            return Err(AppError::ValidationError(format!(
                "JWT_SECRET is too short ({}); it must be at least 32 characters",
                jwt_secret.len()
            )));
        }

        if self.openai_api_key.expose_secret().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "certquiz-test".to_string(),
            users_collection: "users".to_string(),
            sessions_collection: "quiz_sessions".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: None,
            openai_model: "gpt-4o-mini".to_string(),
            openai_temperature: 0.7,
            openai_timeout_secs: 5,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            app_env: "test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.openai_model.is_empty());
        assert!(config.openai_timeout_secs > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "certquiz-test");
        assert_eq!(config.sessions_collection, "quiz_sessions");
        assert!(!config.is_production());
    }

    #[test]
    fn test_validate_for_production_rejects_weak_secrets() {
        let mut config = Config::test_config();
        assert!(config.validate_for_production().is_err());

        config.jwt_secret = SecretString::from(DEV_JWT_SECRET.to_string());
        assert!(config.validate_for_production().is_err());

        config.jwt_secret = SecretString::from("x".repeat(48));
        assert!(config.validate_for_production().is_ok());

        config.openai_api_key = SecretString::from(String::new());
        assert!(config.validate_for_production().is_err());
    }
}
