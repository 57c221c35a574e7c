use crate::llm::client::{CommitMessage, LLMError, ModelClient};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

pub const DEFAULT_HOST: &str = "http://localhost:11434";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    format: Value,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Message,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

/// Client for an Ollama-style local model service
pub struct OllamaClient {
    host: String,
    http_client: Client,
}

impl OllamaClient {
    /// Create a client for the given host URL (e.g. "http://localhost:11434")
    ///
    /// No request timeout is configured: a generation call is allowed to take
    /// as long as the model takes.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            http_client: Client::new(),
        }
    }

    /// JSON schema the model's response is constrained to
    fn commit_message_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "commitTitle": { "type": "string" },
                "commitDescription": { "type": "string" }
            },
            "required": ["commitTitle", "commitDescription"]
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        let url = format!("{}/api/tags", self.host);
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LLMError::ApiError(format!(
                "API returned status {}: {}",
                status, error_text
            )));
        }

        let tags: TagsResponse = response.json().await?;
        let models: Vec<String> = tags.models.into_iter().map(|m| m.name).collect();

        if models.is_empty() {
            return Err(LLMError::NoModelsAvailable);
        }

        Ok(models)
    }

    async fn draft(&self, model: &str, prompt: &str) -> Result<CommitMessage, LLMError> {
        let request_body = ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
            format: Self::commit_message_schema(),
        };

        debug!(model, prompt_len = prompt.len(), "requesting commit message");
        let url = format!("{}/api/chat", self.host);
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LLMError::ApiError(format!(
                "API returned status {}: {}",
                status, error_text
            )));
        }

        let chat: ChatResponse = response.json().await?;
        CommitMessage::decode(&chat.message.content)
    }
}
