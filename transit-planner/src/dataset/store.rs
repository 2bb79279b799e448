//! Lookup indices over a dataset.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Line, LineId, Route, RouteDetails, RouteId, Stop};
use crate::network::{Graph, build_graph};

use super::raw::Dataset;

/// A dataset together with the indices a caller needs to resolve names.
///
/// Name lookups follow the same rules as the graph: when two stops (or two
/// lines) share a name, the later one wins, and unnamed stops are not
/// indexed.
#[derive(Debug, Clone)]
pub struct Store {
    dataset: Dataset,
    stops_by_name: HashMap<String, usize>,
    lines_by_id: HashMap<LineId, usize>,
    lines_by_short_name: HashMap<String, usize>,
    line_by_route_id: HashMap<RouteId, usize>,
    routes_by_id: HashMap<RouteId, Route>,
}

impl Store {
    /// Index a dataset.
    pub fn new(dataset: Dataset) -> Self {
        let stops_by_name = dataset
            .stops
            .iter()
            .enumerate()
            .filter(|(_, stop)| !stop.name.is_empty())
            .map(|(idx, stop)| (stop.name.clone(), idx))
            .collect();

        let mut lines_by_id = HashMap::with_capacity(dataset.lines.len());
        let mut lines_by_short_name = HashMap::with_capacity(dataset.lines.len());
        for (idx, line) in dataset.lines.iter().enumerate() {
            lines_by_id.insert(line.id.clone(), idx);
            lines_by_short_name.insert(line.short_name.clone(), idx);
        }

        let mut line_by_route_id = HashMap::new();
        let mut routes_by_id = HashMap::new();
        for (line_id, routes) in &dataset.routes_by_line_id {
            let line = lines_by_id.get(line_id).copied();
            if line.is_none() {
                warn!(line = %line_id, routes = routes.len(), "Routes listed under unknown line");
            }
            for route in routes {
                if let Some(idx) = line {
                    line_by_route_id.insert(route.id.clone(), idx);
                }
                routes_by_id.insert(route.id.clone(), route.clone());
            }
        }

        Self {
            dataset,
            stops_by_name,
            lines_by_id,
            lines_by_short_name,
            line_by_route_id,
            routes_by_id,
        }
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn stops(&self) -> &[Stop] {
        &self.dataset.stops
    }

    pub fn lines(&self) -> &[Line] {
        &self.dataset.lines
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        self.stops_by_name
            .get(name)
            .map(|&idx| &self.dataset.stops[idx])
    }

    pub fn line_by_id(&self, id: &LineId) -> Option<&Line> {
        self.lines_by_id.get(id).map(|&idx| &self.dataset.lines[idx])
    }

    /// Look up a line by its public short name ("1", "M2", ...).
    pub fn line_by_short_name(&self, short_name: &str) -> Option<&Line> {
        self.lines_by_short_name
            .get(short_name)
            .map(|&idx| &self.dataset.lines[idx])
    }

    /// The line owning a route, if the dataset links them.
    pub fn line_for_route(&self, route: &RouteId) -> Option<&Line> {
        self.line_by_route_id
            .get(route)
            .map(|&idx| &self.dataset.lines[idx])
    }

    /// Routes of a line. Empty for an unknown line.
    pub fn routes_for_line(&self, line: &LineId) -> &[Route] {
        self.dataset
            .routes_by_line_id
            .get(line)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes_by_id.get(id)
    }

    pub fn route_details(&self, id: &RouteId) -> Option<&RouteDetails> {
        self.dataset.route_details_by_route_id.get(id)
    }

    /// Route id to owning line, in the shape the graph builder takes.
    pub fn lines_by_route_id(&self) -> HashMap<RouteId, Line> {
        self.line_by_route_id
            .iter()
            .map(|(route, &idx)| (route.clone(), self.dataset.lines[idx].clone()))
            .collect()
    }

    /// Build the stop graph for this dataset.
    pub fn build_graph(&self) -> Graph {
        build_graph(
            &self.dataset.stops,
            &self.dataset.route_details_by_route_id,
            &self.lines_by_route_id(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> Dataset {
        Dataset {
            fetched_at: None,
            stops: vec![
                Stop::new("1", "Sablons"),
                Stop::new("2", "PlaceA"),
                Stop::new("3", "Longemalle"),
            ],
            lines: vec![Line::new("L1", "Line 1", "1"), Line::new("L2", "Line 2", "2")],
            routes_by_line_id: BTreeMap::from([
                (
                    LineId::from("L1"),
                    vec![Route::new("R1", "outbound"), Route::new("R1b", "inbound")],
                ),
                (LineId::from("L2"), vec![]),
                (LineId::from("L9"), vec![Route::new("R9", "orphan")]),
            ]),
            route_details_by_route_id: BTreeMap::from([
                (
                    RouteId::from("R1"),
                    RouteDetails::new(["Sablons", "PlaceA", "Longemalle"], true),
                ),
                (RouteId::from("R9"), RouteDetails::new(["Longemalle", "Sablons"], false)),
            ]),
        }
    }

    #[test]
    fn stop_lookup_by_name() {
        let store = Store::new(sample());

        assert_eq!(store.stop_by_name("PlaceA").unwrap().id.as_str(), "2");
        assert!(store.stop_by_name("Nowhere").is_none());
        assert_eq!(store.stops().len(), 3);
    }

    #[test]
    fn duplicate_stop_name_later_wins() {
        let mut dataset = sample();
        dataset.stops.push(Stop::new("4", "Sablons"));
        let store = Store::new(dataset);

        assert_eq!(store.stop_by_name("Sablons").unwrap().id.as_str(), "4");
    }

    #[test]
    fn unnamed_stop_not_indexed() {
        let mut dataset = sample();
        dataset.stops.push(Stop::new("x", ""));
        let store = Store::new(dataset);
        let graph = store.build_graph();

        assert!(store.stop_by_name("").is_none());
        assert!(graph.node_for("").is_none());
        assert_eq!(store.stops().len(), 4);
        assert_eq!(graph.stats().unnamed_stops, 1);
    }

    #[test]
    fn line_lookups() {
        let store = Store::new(sample());

        assert_eq!(store.line_by_id(&LineId::from("L2")).unwrap().short_name, "2");
        assert_eq!(store.line_by_short_name("1").unwrap().id.as_str(), "L1");
        assert!(store.line_by_short_name("99").is_none());
        assert_eq!(store.lines().len(), 2);
    }

    #[test]
    fn route_to_line_index() {
        let store = Store::new(sample());

        assert_eq!(
            store.line_for_route(&RouteId::from("R1b")).unwrap().id.as_str(),
            "L1"
        );
        // Listed under a line id that doesn't exist.
        assert!(store.line_for_route(&RouteId::from("R9")).is_none());
        assert_eq!(store.route(&RouteId::from("R9")).unwrap().name, "orphan");
        assert!(store.route(&RouteId::from("nope")).is_none());
    }

    #[test]
    fn routes_for_line() {
        let store = Store::new(sample());

        assert_eq!(store.routes_for_line(&LineId::from("L1")).len(), 2);
        assert!(store.routes_for_line(&LineId::from("L2")).is_empty());
        assert!(store.routes_for_line(&LineId::from("unknown")).is_empty());
    }

    #[test]
    fn route_details_lookup() {
        let store = Store::new(sample());

        assert!(store.route_details(&RouteId::from("R1")).unwrap().wayback);
        assert!(store.route_details(&RouteId::from("R1b")).is_none());
    }

    #[test]
    fn build_graph_resolves_lines() {
        let store = Store::new(sample());

        let graph = store.build_graph();

        assert_eq!(graph.len(), 3);
        assert!(graph.has_edge("Sablons", "PlaceA"));
        assert!(graph.has_edge("PlaceA", "Sablons"));
        assert!(graph.has_edge("Longemalle", "Sablons"));
        assert!(!graph.has_edge("Sablons", "Longemalle"));
        assert_eq!(graph.stats().routes, 2);
        assert_eq!(graph.stats().routes_without_line, 1);

        let sablons = graph.node_for("Sablons").unwrap();
        let edge = graph.edges_from(sablons)[0];
        assert_eq!(graph.tag(&edge).unwrap().line.as_ref().unwrap().short_name, "1");
    }
}
