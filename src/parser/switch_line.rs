use crate::models::switch::{is_enabled, Switch};
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal that opens the state token of a switch marker
pub const STATE_TOKEN: &str = "state[";

/// Whole-line pattern of a switch:
///
/// ```text
/// <ws>- [C]<label><!-- <id> state[C] --><ws>
/// ```
///
/// `C` is exactly one of ` `, `x`, `X`. The label is matched lazily so the
/// marker is always the one that closes the line.
static SWITCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*- \[( |x|X)\](.*?)<!-- ([a-zA-Z0-9_-]+) state\[( |x|X)\] -->\s*$")
        .expect("switch line pattern is valid")
});

/// Parse a single line as a switch
///
/// Returns `None` for anything that is not a well-formed switch line, including
/// malformed ones (`[]`, `[  ]`, `[y]`, missing id, id after the state token,
/// text after the comment, ...). Never fails.
///
/// # Example
/// ```
/// use prswitch::parser::parse_switch_line;
/// let switch = parse_switch_line("- [x] Deploy <!-- deploy state[ ] -->").unwrap();
/// assert_eq!(switch.id, "deploy");
/// assert!(switch.visible);
/// assert!(!switch.recorded);
/// assert_eq!(switch.label, "Deploy");
/// ```
pub fn parse_switch_line(line: &str) -> Option<Switch> {
    let caps = SWITCH_LINE.captures(line)?;

    let visible = is_enabled(caps.get(1)?.as_str());
    let label = caps.get(2)?.as_str().trim();
    let id = caps.get(3)?.as_str().trim();
    let recorded = is_enabled(caps.get(4)?.as_str());

    if id.is_empty() {
        return None;
    }

    Some(Switch::new(id, recorded, visible, label))
}

/// Whether a line is a well-formed switch
pub fn is_switch_line(line: &str) -> bool {
    parse_switch_line(line).is_some()
}
