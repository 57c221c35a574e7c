pub mod executor;
pub mod repository;
pub mod version;

// Re-export commonly used types
pub use executor::{CommandOutput, GitExecutor};
pub use repository::{HANDOFF_FILE, Repository, StagingGuard};
pub use version::GitVersion;
