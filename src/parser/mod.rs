pub mod switch_line;

pub use switch_line::{is_switch_line, parse_switch_line, STATE_TOKEN};
