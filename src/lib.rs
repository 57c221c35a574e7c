pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod workflow;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult, GitError};
pub use git::{GitVersion, Repository};
pub use llm::{CommitMessage, ModelClient, OllamaClient};
pub use workflow::{WorkflowOptions, WorkflowOutcome, run_workflow};
