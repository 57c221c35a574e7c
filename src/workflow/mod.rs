pub mod dispatch;
pub mod run;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use dispatch::{SKIP_CI_TRAILER, WIP_PREFIX, compose_message};
pub use run::{WorkflowOptions, WorkflowOutcome, run_workflow};
pub use state::{Notice, Regenerate, ReviewAction, Transition, WorkflowState, transition};
pub use ui::{ConsoleUi, ReviewUi};
