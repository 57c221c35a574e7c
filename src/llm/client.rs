use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the model service
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The response body failed the JSON parse or the commit-message schema
    /// check. Carries the raw body so the user can see what came back.
    #[error("Could not decode model response: {reason}\nRaw response: {raw}")]
    DecodeError { reason: String, raw: String },

    #[error("The model service reported no available models")]
    NoModelsAvailable,
}

/// A commit message drafted by the model
///
/// Both fields are required; the description may be empty when it would add
/// nothing beyond the title. WIP markers and the attribution footer are not
/// part of this type; they are applied at acceptance time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub title: String,
    pub description: String,
}

impl CommitMessage {
    /// Decode a raw model response body into a CommitMessage.
    ///
    /// Two stages: parse the body as generic JSON, then validate it against
    /// the fixed shape (`commitTitle` and `commitDescription`, both strings).
    /// Either stage failing yields a `DecodeError`; a partially-populated
    /// message is never produced.
    pub fn decode(raw: &str) -> Result<Self, LLMError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| LLMError::DecodeError {
            reason: format!("not valid JSON: {}", e),
            raw: raw.to_string(),
        })?;

        let title = Self::required_string(&value, "commitTitle", raw)?;
        let description = Self::required_string(&value, "commitDescription", raw)?;

        Ok(Self { title, description })
    }

    fn required_string(value: &Value, field: &str, raw: &str) -> Result<String, LLMError> {
        match value.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(LLMError::DecodeError {
                reason: format!("field '{}' is not a string", field),
                raw: raw.to_string(),
            }),
            None => Err(LLMError::DecodeError {
                reason: format!("missing required field '{}'", field),
                raw: raw.to_string(),
            }),
        }
    }
}

/// Trait for model service clients that can draft commit messages
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// List the model identifiers the service has available
    async fn list_models(&self) -> Result<Vec<String>, LLMError>;

    /// Ask `model` to draft a commit message for `prompt`, with the response
    /// constrained to the commit-message schema
    async fn draft(&self, model: &str, prompt: &str) -> Result<CommitMessage, LLMError>;
}
