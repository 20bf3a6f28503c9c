// prswitch - Pull-request description switches
// Keeps hidden state markers of PR checkboxes in sync and reports which ones were toggled

pub mod action;
pub mod cli;
pub mod github;
pub mod models;
pub mod parser;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{ActionConfig, Report, Switch};
pub use parser::parse_switch_line;
pub use services::{compute_report, rewrite_document};
