use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

use crate::{
    ApiKey, Error,
    llms::{ChatPrompt, LlmProvider},
};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// OpenAI chat-completions provider.
///
/// Holds only the model id and sampling temperature; the API credential is
/// taken per call so a client is built fresh for each request and the key is
/// never retained.
#[derive(Debug, Clone)]
pub struct ChatGpt {
    model: String,
    temperature: f32,
}

impl ChatGpt {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

impl Default for ChatGpt {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_TEMPERATURE)
    }
}

#[async_trait]
impl LlmProvider for ChatGpt {
    async fn complete_prompt(
        &self,
        credential: &ApiKey,
        prompt: &ChatPrompt,
    ) -> Result<String, Error> {
        let config = OpenAIConfig::new().with_api_key(credential.as_str());
        let client = Client::with_config(config);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.temperature)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(prompt.system.as_str())
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt.user.as_str())
                    .build()?
                    .into(),
            ])
            .build()?;

        tracing::debug!(model = %self.model, "sending completion request");
        let response = client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(Error::NoCompletionChoice)
    }
}
