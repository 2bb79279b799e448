//! Transit line type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LineId;

/// A named transit service, such as "Line 1", owning one or more routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    /// Short public designation shown on vehicles ("1", "M2", ...).
    pub short_name: String,
}

impl Line {
    /// Create a new line.
    pub fn new(
        id: impl Into<LineId>,
        name: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: short_name.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.short_name.is_empty() {
            f.write_str(&self.name)
        } else {
            f.write_str(&self.short_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_short_name() {
        let line = Line::new("11821953316814882", "Renens-Gare - Pully-Gare", "17");
        assert_eq!(line.to_string(), "17");
    }

    #[test]
    fn display_falls_back_to_name() {
        let line = Line::new("L9", "Night Service", "");
        assert_eq!(line.to_string(), "Night Service");
    }
}
