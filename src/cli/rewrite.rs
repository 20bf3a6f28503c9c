use crate::cli::read_document;
use crate::services::rewrite_document_with_stats;
use crate::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Args, Debug, Default, Clone)]
pub struct RewriteArgs {
    /// Markdown file to rewrite (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Replace the file instead of printing the result
    #[arg(short, long, requires = "file")]
    pub in_place: bool,
}

pub fn run(args: RewriteArgs) -> Result<()> {
    let document = read_document(args.file.as_deref())?;
    let rewrite = rewrite_document_with_stats(&document);

    match (&args.file, args.in_place) {
        (Some(path), true) if path.as_os_str() != "-" => {
            if rewrite.updated == 0 {
                println!("{}", "✅ All switches already in sync".green());
                return Ok(());
            }
            write_atomic(path, &rewrite.body)?;
            println!(
                "{}",
                format!(
                    "✅ Synchronized {} switch(es) in {}",
                    rewrite.updated,
                    path.display()
                )
                .green()
            );
        }
        _ => {
            print!("{}", rewrite.body);
            std::io::stdout().flush()?;
        }
    }

    Ok(())
}

/// Replace `path` with `content` through a temporary file in the same directory
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}
