//! Switch marker rewriting
//!
//! Brings every hidden marker back in line with its checkbox. Only the single
//! state character inside `state[...]` is ever replaced; every other byte of
//! the document is kept as is.

use crate::models::switch::checkbox_char;
use crate::models::Switch;
use crate::parser::{parse_switch_line, STATE_TOKEN};
use crate::services::report_service::LINE_SEPARATOR;

/// Outcome of rewriting a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Rewritten document
    pub body: String,

    /// Number of lines whose marker was updated
    pub updated: usize,
}

/// Rewrite a document so that every marker matches its checkbox
///
/// Idempotent: rewriting the output again returns it unchanged.
///
/// # Example
/// ```
/// use prswitch::services::rewrite_service::rewrite_document;
/// let body = rewrite_document("- [ ] run <!-- run state[x] -->");
/// assert_eq!(body, "- [ ] run <!-- run state[ ] -->");
/// ```
pub fn rewrite_document(document: &str) -> String {
    rewrite_document_with_stats(document).body
}

/// Same as [`rewrite_document`], also counting the updated lines
pub fn rewrite_document_with_stats(document: &str) -> Rewrite {
    let mut updated = 0;

    let lines: Vec<String> = document
        .split(LINE_SEPARATOR)
        .map(|line| match parse_switch_line(line) {
            Some(switch) if switch.has_changed() => {
                updated += 1;
                rewrite_line(line, &switch)
            }
            _ => line.to_string(),
        })
        .collect();

    Rewrite {
        body: lines.join(LINE_SEPARATOR),
        updated,
    }
}

/// Replace the marker state of a matched line with its visible state
///
/// The marker is the last `state[` token of the line; everything between it
/// and the following `]` is replaced by the new state character.
fn rewrite_line(line: &str, switch: &Switch) -> String {
    let Some(token_start) = line.rfind(STATE_TOKEN) else {
        return line.to_string();
    };
    let value_start = token_start + STATE_TOKEN.len();
    let Some(value_len) = line[value_start..].find(']') else {
        return line.to_string();
    };
    let value_end = value_start + value_len;

    let mut rewritten = String::with_capacity(line.len());
    rewritten.push_str(&line[..value_start]);
    rewritten.push(checkbox_char(switch.visible));
    rewritten.push_str(&line[value_end..]);
    rewritten
}
