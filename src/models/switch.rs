//! Switch model
//!
//! A switch is one checkbox line of a pull-request description that carries a
//! hidden marker with its last committed state:
//!
//! ```text
//! - [x] Deploy to staging <!-- deploy-staging state[ ] -->
//! ```

use serde::{Deserialize, Serialize};

/// One recognized switch line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    /// Identifier from the hidden marker (`[A-Za-z0-9-_]+`)
    pub id: String,

    /// State stored in the hidden marker (last committed state)
    pub recorded: bool,

    /// State shown by the checkbox (what the user wants now)
    pub visible: bool,

    /// Trimmed text between the checkbox and the marker
    pub label: String,
}

impl Switch {
    pub fn new(id: impl Into<String>, recorded: bool, visible: bool, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recorded,
            visible,
            label: label.into(),
        }
    }

    /// Whether the checkbox was toggled since the marker was last written
    pub fn has_changed(&self) -> bool {
        self.recorded != self.visible
    }
}

/// Checkbox character for a state, as written inside `[...]`
pub fn checkbox_char(enabled: bool) -> char {
    if enabled {
        'x'
    } else {
        ' '
    }
}

/// A checkbox character is enabled unless it is a blank
pub fn is_enabled(checkbox: &str) -> bool {
    checkbox != " "
}
