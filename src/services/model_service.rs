use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::generation_request::GenerationRequest,
};

/// Language-model backend that turns a generation request into raw quiz JSON.
///
/// `Ok(None)` means the provider answered without any content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &GenerationRequest) -> AppResult<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(api_base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            timeout: Duration::from_secs(config.openai_timeout_secs),
        }
    }

    fn request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        json!({
            "model": self.model,
            "temperature": self.temperature,
            "response_format": {
                "type": "json_schema",
                "json_schema": request.output_schema(),
            },
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user },
            ],
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiModelService {
    async fn complete(&self, request: &GenerationRequest) -> AppResult<Option<String>> {
        log::info!(
            "Requesting {} questions from model {}",
            request.contract.count(),
            self.model
        );

        let chat = self.client.chat();
        let call = chat.create_byot(self.request_body(request));

        let completion: ChatCompletion = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                log::error!("Model call timed out after {:?}", self.timeout);
                AppError::ModelError(format!("timed out after {}s", self.timeout.as_secs()))
            })??;

        Ok(first_content(completion))
    }
}

fn first_content(completion: ChatCompletion) -> Option<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::Difficulty,
        services::generation_request::GenerationParams,
    };

    fn sample_request() -> GenerationRequest {
        GenerationRequest::build(&GenerationParams::new("Docker", Difficulty::Beginner).with_count(3))
            .unwrap()
    }

    #[test]
    fn request_body_carries_schema_and_messages() {
        let service = OpenAiModelService::new(&Config::test_config());
        let body = service.request_body(&sample_request());

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "quiz_schema");
        assert_eq!(
            body["response_format"]["json_schema"]["schema"]["properties"]["questions"]["maxItems"],
            3
        );
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
    }

    #[actix_web::test]
    async fn complete_reports_unreachable_provider_as_model_error() {
        let mut config = Config::test_config();
        config.openai_api_base = Some("http://10.255.255.1/v1".to_string());
        config.openai_timeout_secs = 1;
        let service = OpenAiModelService::new(&config);

        let result = service.complete(&sample_request()).await;
        assert!(matches!(result, Err(AppError::ModelError(_))));
    }

    #[test]
    fn first_content_reads_first_choice() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"topic\":\"x\"}" } }]
        }))
        .unwrap();
        assert_eq!(first_content(completion).as_deref(), Some("{\"topic\":\"x\"}"));
    }

    #[test]
    fn first_content_is_none_without_choices_or_content() {
        let no_choices: ChatCompletion = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(first_content(no_choices).is_none());

        let null_content: ChatCompletion = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .unwrap();
        assert!(first_content(null_content).is_none());

        let blank: ChatCompletion = serde_json::from_value(json!({
            "choices": [{ "message": { "content": "   " } }]
        }))
        .unwrap();
        assert!(first_content(blank).is_none());
    }
}
