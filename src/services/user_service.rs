use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{hash_password, verify_password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{AuthResponse, RegisterResponse, UserDto},
        },
    },
    repositories::UserRepository,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    jwt_service: Arc<JwtService>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            repository,
            jwt_service,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let user = self
            .repository
            .create(User::new(&request.username, &password_hash))
            .await?;

        log::info!("Registered user {}", user.username);

        Ok(RegisterResponse {
            data: UserDto::from(user),
            message: "Account created. Please log in.".to_string(),
        })
    }

    /// Unknown users and wrong passwords fail the same way.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            log::warn!("Failed login for {}", request.username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.jwt_service.create_token(&user)?;

        Ok(AuthResponse {
            token,
            username: user.username,
            expires_in_hours: self.jwt_service.expiration_hours(),
        })
    }
}
