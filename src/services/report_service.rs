//! Switch report computation
//!
//! Scans a pull-request body line by line and folds every recognized switch
//! into a [`Report`]. Lines that are not switches (including malformed ones)
//! contribute nothing.

use crate::models::{Report, Switch};
use crate::parser::parse_switch_line;
use std::collections::BTreeMap;

/// Line separator used to split and rejoin documents
pub const LINE_SEPARATOR: &str = "\n";

/// All switches of a document, in document order
pub fn collect_switches(document: &str) -> Vec<Switch> {
    document
        .split(LINE_SEPARATOR)
        .filter_map(parse_switch_line)
        .collect()
}

/// Compute the report for a document
///
/// When an id appears on several lines the last one wins, for both `state`
/// and `captures`. `has_changed` still accounts for every line, including the
/// ones a later duplicate overrides.
///
/// # Example
/// ```
/// use prswitch::services::report_service::compute_report;
/// let report = compute_report("- [ ] run <!-- run state[x] -->", false);
/// assert!(report.has_changed);
/// assert_eq!(report.state.get("run"), Some(&false));
/// assert!(report.captures.is_none());
/// ```
pub fn compute_report(document: &str, capture_labels: bool) -> Report {
    let switches = collect_switches(document);
    build_report(&switches, capture_labels)
}

/// Fold already-parsed switches into a report
pub fn build_report(switches: &[Switch], capture_labels: bool) -> Report {
    let has_changed = switches.iter().any(Switch::has_changed);

    let state = switches
        .iter()
        .fold(BTreeMap::new(), |mut acc, switch| {
            acc.insert(switch.id.clone(), switch.visible);
            acc
        });

    let captures = capture_labels.then(|| {
        switches.iter().fold(BTreeMap::new(), |mut acc, switch| {
            acc.insert(switch.id.clone(), switch.label.clone());
            acc
        })
    });

    Report {
        has_changed,
        state,
        captures,
    }
}
