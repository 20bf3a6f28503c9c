//! GitHub Actions plumbing: startup delay, step outputs and logging

pub mod delay;
pub mod logging;
pub mod output;

pub use delay::delay_action;
pub use output::{error_command, ActionOutput, OutputError, WorkflowOutput};
