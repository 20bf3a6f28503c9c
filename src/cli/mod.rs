pub mod report;
pub mod rewrite;
pub mod run;

use crate::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a document from a file, or from stdin for `None` / `-`
pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}
