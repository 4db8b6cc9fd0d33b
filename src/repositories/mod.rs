pub mod quiz_session_repository;
pub mod user_repository;

pub use quiz_session_repository::{MongoQuizSessionRepository, QuizSessionRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
