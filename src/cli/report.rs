use crate::cli::read_document;
use crate::models::Switch;
use crate::services::{build_report, collect_switches};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct ReportArgs {
    /// Markdown file to scan (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Include switch labels in the report
    #[arg(short, long)]
    pub capture_labels: bool,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pub pretty: bool,

    /// List switches instead of printing the JSON report
    #[arg(short, long)]
    pub list: bool,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let document = read_document(args.file.as_deref())?;
    let switches = collect_switches(&document);

    if args.list {
        if switches.is_empty() {
            println!("{}", "No switches found".yellow());
        }
        for switch in &switches {
            println!("{}", format_switch(switch));
        }
        return Ok(());
    }

    let report = build_report(&switches, args.capture_labels);
    let json = if args.pretty {
        report.to_json_pretty()?
    } else {
        report.to_json()?
    };
    println!("{}", json);

    Ok(())
}

fn format_switch(switch: &Switch) -> String {
    let state = |enabled: bool| if enabled { "on" } else { "off" };
    let transition = format!("{} -> {}", state(switch.recorded), state(switch.visible));
    let transition = if switch.has_changed() {
        transition.yellow().bold()
    } else {
        transition.normal()
    };
    format!("{}  {}  {}", switch.id.cyan(), transition, switch.label.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_switch_contains_fields() {
        colored::control::set_override(false);
        let line = format_switch(&Switch::new("deploy", false, true, "Deploy it"));
        assert_eq!(line, "deploy  off -> on  Deploy it");
    }

    #[test]
    fn test_run_on_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "- [x] a <!-- a state[x] -->\n").unwrap();

        let args = ReportArgs {
            file: Some(temp.path().to_path_buf()),
            capture_labels: true,
            ..ReportArgs::default()
        };
        run(args).unwrap();
    }
}
