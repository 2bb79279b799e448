//! Route types.

use serde::{Deserialize, Serialize};

use super::RouteId;

/// One concrete directed variant of a line (e.g. direction A to B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    #[serde(default)]
    pub name: String,
}

impl Route {
    /// Create a new route.
    pub fn new(id: impl Into<RouteId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The stops a route actually drives through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDetails {
    /// Stop names in the order the vehicle visits them.
    pub stops: Vec<String>,

    /// Whether the same vehicles also drive the sequence in reverse.
    #[serde(default)]
    pub wayback: bool,
}

impl RouteDetails {
    /// Create route details from an ordered list of stop names.
    pub fn new<I, S>(stops: I, wayback: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stops: stops.into_iter().map(Into::into).collect(),
            wayback,
        }
    }

    /// Number of stops on the route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the route visits no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
