use std::fmt;

use serde::Deserialize;

/// Which side of a separator a check or violation concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Before,
    After,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of the comma-spacing pass, fixed for a whole run.
///
/// Deserializes from the rule's option object:
/// `{ "before": false, "after": true, "ignoreIfFirstTokenOfLine": false }`.
/// Missing keys take their defaults; unknown keys are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingConfig {
    #[serde(rename = "before")]
    pub require_space_before: bool,
    #[serde(rename = "after")]
    pub require_space_after: bool,
    #[serde(rename = "ignoreIfFirstTokenOfLine")]
    pub exempt_line_leading_separator: bool,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            require_space_before: false,
            require_space_after: true,
            exempt_line_leading_separator: false,
        }
    }
}

impl SpacingConfig {
    pub fn requires_space(&self, side: Side) -> bool {
        match side {
            Side::Before => self.require_space_before,
            Side::After => self.require_space_after,
        }
    }
}
