pub mod report_service;
pub mod rewrite_service;

pub use report_service::{build_report, collect_switches, compute_report};
pub use rewrite_service::{rewrite_document, rewrite_document_with_stats, Rewrite};
