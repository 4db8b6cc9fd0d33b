pub mod fixtures {
    use crate::models::domain::{Answer, Difficulty, Question, QuestionType, Quiz};

    pub fn multiple_choice(id: &str, answer: &str) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::MultipleChoice,
            prompt: "Which service provides object storage?".to_string(),
            choices: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            answer: Answer::Text(answer.to_string()),
            explanation: Some("S3 is object storage.".to_string()),
        }
    }

    pub fn true_false(id: &str, answer: bool) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::TrueFalse,
            prompt: "A Pod can hold more than one container.".to_string(),
            choices: None,
            answer: Answer::Flag(answer),
            explanation: None,
        }
    }

    pub fn short_answer(id: &str, answer: &str) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::ShortAnswer,
            prompt: "Name the container orchestrator originally built at Google.".to_string(),
            choices: None,
            answer: Answer::Text(answer.to_string()),
            explanation: Some("Borg inspired Kubernetes.".to_string()),
        }
    }

    /// Three questions, one of each type.
    pub fn sample_quiz() -> Quiz {
        Quiz {
            topic: "Kubernetes".to_string(),
            difficulty: Difficulty::Intermediate,
            questions: vec![
                multiple_choice("q1", "B"),
                true_false("q2", true),
                short_answer("q3", "Kubernetes"),
            ],
        }
    }

    pub fn sample_quiz_json() -> String {
        serde_json::to_string(&sample_quiz()).expect("fixture quiz should serialize")
    }
}

pub mod repositories {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{QuizSession, User},
        repositories::{QuizSessionRepository, UserRepository},
    };

    #[derive(Default)]
    pub struct InMemoryUsers {
        users: RwLock<HashMap<String, User>>,
    }

    #[async_trait]
    impl UserRepository for InMemoryUsers {
        async fn create(&self, user: User) -> AppResult<User> {
            let mut users = self.users.write().await;
            if users.contains_key(&user.username) {
                return Err(AppError::AlreadyExists(format!(
                    "User with username '{}' already exists",
                    user.username
                )));
            }
            users.insert(user.username.clone(), user.clone());
            Ok(user)
        }

        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
            Ok(self.users.read().await.get(username).cloned())
        }
    }

    #[derive(Default)]
    pub struct InMemorySessions {
        sessions: RwLock<HashMap<String, QuizSession>>,
    }

    #[async_trait]
    impl QuizSessionRepository for InMemorySessions {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<QuizSession>> {
            Ok(self.sessions.read().await.get(username).cloned())
        }

        async fn save(&self, session: QuizSession) -> AppResult<QuizSession> {
            self.sessions
                .write()
                .await
                .insert(session.username.clone(), session.clone());
            Ok(session)
        }
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionType;

    #[test]
    fn test_fixtures_sample_quiz_has_one_of_each_type() {
        let quiz = sample_quiz();
        let types: Vec<QuestionType> = quiz.questions.iter().map(|q| q.question_type).collect();
        assert_eq!(types, QuestionType::ALL.to_vec());
    }

    #[test]
    fn test_fixtures_sample_quiz_json_parses_back() {
        let parsed: crate::models::domain::Quiz =
            serde_json::from_str(&sample_quiz_json()).unwrap();
        assert_eq!(parsed, sample_quiz());
    }
}
