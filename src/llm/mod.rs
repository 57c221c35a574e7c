pub mod client;
pub mod ollama;
pub mod prompt;

pub use client::{CommitMessage, LLMError, ModelClient};
pub use ollama::OllamaClient;
pub use prompt::build_prompt;
