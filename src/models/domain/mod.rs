pub mod grade_report;
pub mod question;
pub mod quiz;
pub mod quiz_session;
pub mod user;
pub use grade_report::{GradeReport, QuestionResult};
pub use question::{Answer, Question, QuestionType};
pub use quiz::{Difficulty, Quiz};
pub use quiz_session::{HistoryEntry, QuizSession};
pub use user::User;
