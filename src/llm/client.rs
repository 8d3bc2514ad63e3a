use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::error;

use super::prompt::{build_system_prompt, build_user_turn};
use crate::config::Config;

/// Answers a question given search context. Provider failures come back as
/// marked text rather than errors.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, question: &str, context: &str) -> String;
}

pub struct LlmClient {
    chat_client: Client<OpenAIConfig>,
    chat_model: String,
    system_prompt: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        let mut chat_config = OpenAIConfig::new().with_api_key(&config.openai_api_key);
        if let Some(base) = &config.openai_base_url {
            chat_config = chat_config.with_api_base(base);
        }

        Self {
            chat_client: Client::with_config(chat_config),
            chat_model: config.chat_model.clone(),
            system_prompt: build_system_prompt(&config.documents),
        }
    }

    pub fn messages(
        &self,
        question: &str,
        context: &str,
    ) -> anyhow::Result<Vec<ChatCompletionRequestMessage>> {
        Ok(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(build_user_turn(question, context))
                .build()?
                .into(),
        ])
    }

    pub async fn chat(&self, messages: Vec<ChatCompletionRequestMessage>) -> anyhow::Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.chat_model)
            .messages(messages)
            .temperature(0.0)
            .build()?;

        let response = self.chat_client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_else(|| "No response from LLM".to_string());

        Ok(content)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, question: &str, context: &str) -> String {
        let result = match self.messages(question, context) {
            Ok(messages) => self.chat(messages).await,
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| {
            error!("LLM request failed: {:?}", e);
            format!("[Error calling LLM: {}]", e)
        })
    }
}
