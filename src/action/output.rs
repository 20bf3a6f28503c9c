//! GitHub Actions workflow commands
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` using the
//! multi-line `name<<DELIMITER` syntax. Without that file (older runners or
//! local runs) the legacy `::set-output` command is printed on stdout.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors that can occur when publishing outputs
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write output file: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Unexpected input: name should not contain the delimiter \"{0}\"")]
    DelimiterInName(String),

    #[error("Unexpected input: value should not contain the delimiter \"{0}\"")]
    DelimiterInValue(String),
}

/// Sink for named step outputs
pub trait ActionOutput {
    fn set_output(&mut self, name: &str, value: &str) -> OutputResult<()>;
}

/// Step outputs of the running workflow
#[derive(Debug, Clone, Default)]
pub struct WorkflowOutput {
    output_file: Option<PathBuf>,
}

impl WorkflowOutput {
    /// Outputs written to the given `GITHUB_OUTPUT` file, or to stdout when `None`
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Outputs configured from the `GITHUB_OUTPUT` environment variable
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os("GITHUB_OUTPUT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        )
    }
}

impl ActionOutput for WorkflowOutput {
    fn set_output(&mut self, name: &str, value: &str) -> OutputResult<()> {
        match &self.output_file {
            Some(path) => {
                let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
                let entry = file_command_entry(name, value, &delimiter)?;
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(entry.as_bytes())?;
            }
            None => {
                println!();
                println!("::set-output name={}::{}", escape_property(name), escape_data(value));
            }
        }
        Ok(())
    }
}

/// Format one `name<<delimiter` entry of a file command
pub fn file_command_entry(name: &str, value: &str, delimiter: &str) -> OutputResult<String> {
    if name.contains(delimiter) {
        return Err(OutputError::DelimiterInName(delimiter.to_string()));
    }
    if value.contains(delimiter) {
        return Err(OutputError::DelimiterInValue(delimiter.to_string()));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Escape the message part of a workflow command
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Workflow command that marks the step as failed with `message`
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}
