//! The raw dataset handed over by a data source.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, Route, RouteDetails, RouteId, Stop};

/// A complete snapshot of the transit network as provided upstream.
///
/// Maps are ordered so that the same snapshot always produces the same graph
/// (and therefore the same tie-breaks between equally short paths).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// When the data was fetched from upstream, if known.
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,

    pub stops: Vec<Stop>,

    pub lines: Vec<Line>,

    #[serde(default)]
    pub routes_by_line_id: BTreeMap<LineId, Vec<Route>>,

    #[serde(default)]
    pub route_details_by_route_id: BTreeMap<RouteId, RouteDetails>,
}

impl Dataset {
    /// Number of routes with stop details.
    pub fn route_count(&self) -> usize {
        self.route_details_by_route_id.len()
    }

    /// How old the snapshot is at `now`, if it records a fetch time.
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.fetched_at.map(|t| now.signed_duration_since(t))
    }

    /// Returns true if the dataset has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn minimal_json_uses_defaults() {
        let json = r#"{
            "stops": [{"id": "1", "name": "Sablons"}],
            "lines": []
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.stops.len(), 1);
        assert!(dataset.fetched_at.is_none());
        assert_eq!(dataset.route_count(), 0);
        assert!(dataset.routes_by_line_id.is_empty());
    }

    #[test]
    fn full_json() {
        let json = r#"{
            "fetched_at": "2024-03-15T10:00:00Z",
            "stops": [
                {"id": "1", "name": "Sablons"},
                {"id": "2", "name": "Longemalle"}
            ],
            "lines": [{"id": "L1", "name": "Line 1", "short_name": "1"}],
            "routes_by_line_id": {"L1": [{"id": "R1", "name": "Sablons - Longemalle"}]},
            "route_details_by_route_id": {
                "R1": {"stops": ["Sablons", "Longemalle"], "wayback": true}
            }
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.lines[0].short_name, "1");
        assert_eq!(dataset.routes_by_line_id[&LineId::from("L1")][0].id.as_str(), "R1");
        assert!(dataset.route_details_by_route_id[&RouteId::from("R1")].wayback);
        assert_eq!(dataset.route_count(), 1);
    }

    #[test]
    fn age_from_fetch_time() {
        let fetched = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let dataset = Dataset {
            fetched_at: Some(fetched),
            ..Dataset::default()
        };

        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        assert_eq!(dataset.age(now), Some(Duration::minutes(150)));
        assert!(Dataset::default().age(now).is_none());
        assert!(dataset.is_empty());
    }
}
