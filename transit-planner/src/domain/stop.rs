//! Stop type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StopId;

/// A named physical location served by transit.
///
/// The name is the join key between stops and route stop sequences, so two
/// stops are considered the same place in the network when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: impl Into<StopId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
