use std::collections::HashMap;

use crate::{
    models::domain::{GradeReport, Question, QuestionResult, QuestionType, Quiz},
    services::answer_normalizer::{
        normalize_short_answer, normalize_true_false, ShortAnswer, TrueFalseAnswer,
    },
};

pub const PASS_THRESHOLD: f64 = 70.0;

pub struct GradingService;

impl GradingService {
    pub fn passes(percentage: f64) -> bool {
        percentage >= PASS_THRESHOLD
    }

    /// Grades every question of the quiz in order.
    ///
    /// Total over any submission: an id missing from `answers` grades as an
    /// empty string, and ids that match no question are ignored.
    pub fn grade(quiz: &Quiz, answers: &HashMap<String, String>) -> GradeReport {
        let details: Vec<QuestionResult> = quiz
            .questions
            .iter()
            .map(|question| {
                let user_answer = answers.get(&question.id).cloned().unwrap_or_default();
                let correct = Self::is_correct(question, &user_answer);

                QuestionResult {
                    id: question.id.clone(),
                    prompt: question.prompt.clone(),
                    user_answer,
                    gold_answer: question.answer.clone(),
                    correct,
                    explanation: question.explanation.clone(),
                }
            })
            .collect();

        let total = details.len();
        let correct = details.iter().filter(|d| d.correct).count();
        let percentage = if total == 0 {
            0.0
        } else {
            100.0 * correct as f64 / total as f64
        };

        GradeReport {
            correct,
            total,
            percentage,
            passed: Self::passes(percentage),
            details,
        }
    }

    fn is_correct(question: &Question, user_answer: &str) -> bool {
        match question.question_type {
            QuestionType::TrueFalse => {
                match (normalize_true_false(user_answer), question.answer.as_bool()) {
                    (TrueFalseAnswer::Value(user), Some(gold)) => user == gold,
                    _ => false,
                }
            }
            // Containment either way counts: "pods" matches "kubernetes pods".
            QuestionType::ShortAnswer => match normalize_short_answer(user_answer) {
                ShortAnswer::Text(user) => {
                    let gold = question.answer.as_text().trim().to_lowercase();
                    user == gold || gold.contains(&user) || user.contains(&gold)
                }
                ShortAnswer::Empty => false,
            },
            QuestionType::MultipleChoice => user_answer == question.answer.as_text(),
        }
    }
}
