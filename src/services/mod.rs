pub mod answer_normalizer;
pub mod badge_service;
pub mod generation_request;
pub mod grading_service;
pub mod model_service;
pub mod quiz_contract;
pub mod quiz_service;
pub mod user_service;

pub use model_service::{CompletionProvider, OpenAiModelService};
pub use quiz_service::QuizService;
pub use user_service::UserService;
