use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{grade_report::GradeReport, quiz::Difficulty, Quiz};

pub const HISTORY_LIMIT: usize = 20;

/// Per-user slot: the quiz currently being taken and the score history.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSession {
    pub username: String,
    #[serde(default)]
    pub active_quiz: Option<Quiz>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub topic: String,
    pub difficulty: Difficulty,
    pub pct: f64,
    pub taken_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn from_report(quiz: &Quiz, report: &GradeReport) -> Self {
        HistoryEntry {
            topic: quiz.topic.clone(),
            difficulty: quiz.difficulty,
            pct: (report.percentage * 10.0).round_ties_even() / 10.0,
            taken_at: Utc::now(),
        }
    }
}

impl QuizSession {
    pub fn new(username: &str) -> Self {
        QuizSession {
            username: username.to_string(),
            active_quiz: None,
            history: Vec::new(),
            modified_at: Some(Utc::now()),
        }
    }

    /// Replaces (never merges) the active quiz.
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.active_quiz = Some(quiz);
        self.modified_at = Some(Utc::now());
        self
    }

    /// Prepends an entry, keeping at most `HISTORY_LIMIT` newest first.
    pub fn with_history_entry(mut self, entry: HistoryEntry) -> Self {
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
        self.modified_at = Some(Utc::now());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_quiz;

    fn entry(topic: &str, pct: f64) -> HistoryEntry {
        HistoryEntry {
            topic: topic.to_string(),
            difficulty: Difficulty::Beginner,
            pct,
            taken_at: Utc::now(),
        }
    }

    #[test]
    fn with_quiz_replaces_previous_quiz() {
        let mut second = sample_quiz();
        second.topic = "Docker".to_string();

        let session = QuizSession::new("alice")
            .with_quiz(sample_quiz())
            .with_quiz(second.clone());

        assert_eq!(session.active_quiz, Some(second));
    }

    #[test]
    fn history_is_newest_first_and_bounded() {
        let mut session = QuizSession::new("alice");
        for i in 0..25 {
            session = session.with_history_entry(entry(&format!("topic-{}", i), i as f64));
        }

        assert_eq!(session.history.len(), HISTORY_LIMIT);
        assert_eq!(session.history[0].topic, "topic-24");
        assert_eq!(session.history[HISTORY_LIMIT - 1].topic, "topic-5");
    }

    #[test]
    fn history_entry_rounds_to_one_decimal() {
        let quiz = sample_quiz();
        let report = GradeReport {
            correct: 2,
            total: 3,
            percentage: 200.0 / 3.0,
            passed: false,
            details: vec![],
        };

        let entry = HistoryEntry::from_report(&quiz, &report);
        assert_eq!(entry.pct, 66.7);
        assert_eq!(entry.topic, quiz.topic);
        assert_eq!(entry.difficulty, quiz.difficulty);
    }

    #[test]
    fn history_entry_rounds_ties_to_even() {
        let report = GradeReport {
            correct: 1,
            total: 16,
            percentage: 6.25,
            passed: false,
            details: vec![],
        };

        assert_eq!(HistoryEntry::from_report(&sample_quiz(), &report).pct, 6.2);
    }

    #[test]
    fn session_deserializes_without_optional_fields() {
        let session: QuizSession = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert!(session.active_quiz.is_none());
        assert!(session.history.is_empty());
    }
}
