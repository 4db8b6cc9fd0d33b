use serde_json::Value;

use crate::{
    constants::quiz_prompt::{DEFAULT_QUESTION_COUNT, QUIZ_SYSTEM_PROMPT},
    errors::AppResult,
    models::domain::{Difficulty, QuestionType},
    services::quiz_contract::QuizContract,
};

/// What the user asked for on the generation form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationParams {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
    pub omit: Vec<QuestionType>,
}

impl GenerationParams {
    pub fn new(topic: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            count: DEFAULT_QUESTION_COUNT,
            omit: Vec::new(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_omitted(mut self, omit: impl IntoIterator<Item = QuestionType>) -> Self {
        self.omit.extend(omit);
        self
    }
}

/// Everything the provider needs for one quiz: instructions plus the output contract.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub contract: QuizContract,
}

impl GenerationRequest {
    /// Fails with `NoAllowedTypes` when `omit` leaves nothing to ask for.
    pub fn build(params: &GenerationParams) -> AppResult<Self> {
        let allowed_types: Vec<QuestionType> = QuestionType::ALL
            .into_iter()
            .filter(|t| !params.omit.contains(t))
            .collect();

        let contract = QuizContract::new(params.count, allowed_types)?;

        let type_names: Vec<&str> = contract.allowed_types().iter().map(|t| t.as_str()).collect();
        let user = format!(
            "Create a quiz about: {}. Difficulty: {}. Number of questions: {}. Allowed types: {}.",
            params.topic,
            params.difficulty,
            contract.count(),
            type_names.join(", ")
        );

        Ok(Self {
            system: QUIZ_SYSTEM_PROMPT.to_string(),
            user,
            contract,
        })
    }

    pub fn output_schema(&self) -> Value {
        self.contract.json_schema()
    }
}
