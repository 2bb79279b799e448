//! Arena-backed directed graph of stops.

use std::collections::HashMap;

use crate::domain::{Line, RouteId, Stop};

/// Index of a node in the graph arena.
///
/// Indices are stable for the lifetime of the graph they came from and
/// meaningless for any other graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

/// The route (and owning line, when known) an edge was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTag {
    pub route: RouteId,
    pub line: Option<Line>,
}

/// A directed link between two consecutive stops of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub(super) tag: usize,
}

/// A stop in the graph together with its outgoing edges.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) stop: Stop,
    pub(super) edges: Vec<Edge>,
}

impl Node {
    /// The stop this node represents.
    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    /// Outgoing edges, in the order they were created.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Data-quality counters collected while building a graph.
///
/// None of these are errors: the graph is usable regardless, it just has
/// fewer edges than a fully consistent dataset would produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Routes walked.
    pub routes: usize,
    /// Directed edges created.
    pub edges: usize,
    /// Route stop references whose name matched no stop.
    pub skipped_stop_refs: usize,
    /// Routes with no resolvable owning line.
    pub routes_without_line: usize,
    /// Stops whose name shadowed an earlier stop in the name index.
    pub duplicate_stop_names: usize,
    /// Stops with an empty name, which are never indexed.
    pub unnamed_stops: usize,
}

impl BuildStats {
    /// Returns true if the dataset was fully consistent.
    pub fn is_clean(&self) -> bool {
        self.skipped_stop_refs == 0
            && self.routes_without_line == 0
            && self.duplicate_stop_names == 0
            && self.unnamed_stops == 0
    }
}

/// Immutable directed graph of stops connected by route-tagged edges.
///
/// Built once by [`build_graph`](super::build_graph) and read-only
/// afterwards, so a single instance can serve any number of concurrent
/// searches.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(super) nodes: Vec<Node>,
    pub(super) by_name: HashMap<String, NodeIndex>,
    pub(super) tags: Vec<RouteTag>,
    pub(super) stats: BuildStats,
}

impl Graph {
    /// Look up the node for a stop name.
    pub fn node_for(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    /// Get a node by index.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    /// The stop behind a node index.
    pub fn stop(&self, index: NodeIndex) -> Option<&Stop> {
        self.node(index).map(Node::stop)
    }

    /// Enumerate all nodes with their indices.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeIndex(idx), node))
    }

    /// Outgoing edges of a node. Empty for an unknown index.
    pub fn edges_from(&self, index: NodeIndex) -> &[Edge] {
        self.node(index).map(Node::edges).unwrap_or_default()
    }

    /// All edges going directly from `from` to `to`, one per route serving
    /// the pair in that direction.
    pub fn edges_between(&self, from: NodeIndex, to: NodeIndex) -> impl Iterator<Item = &Edge> {
        self.edges_from(from).iter().filter(move |e| e.to == to)
    }

    /// Returns true if some route links the two named stops directly.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_for(from), self.node_for(to)) {
            (Some(a), Some(b)) => self.edges_between(a, b).next().is_some(),
            _ => false,
        }
    }

    /// The route and line an edge was derived from.
    ///
    /// `None` if the edge came from a different graph.
    pub fn tag(&self, edge: &Edge) -> Option<&RouteTag> {
        self.tags.get(edge.tag)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Data-quality counters from construction.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node_for("Sablons").is_none());
        assert!(graph.node(NodeIndex(0)).is_none());
        assert!(graph.edges_from(NodeIndex(3)).is_empty());
        assert!(!graph.has_edge("A", "B"));
        assert!(graph.stats().is_clean());
    }

    #[test]
    fn tag_of_foreign_edge_is_none() {
        let graph = Graph::default();
        let edge = Edge {
            from: NodeIndex(0),
            to: NodeIndex(1),
            tag: 2,
        };

        assert!(graph.tag(&edge).is_none());
    }

    #[test]
    fn stats_clean_ignores_sizes() {
        let stats = BuildStats {
            routes: 4,
            edges: 12,
            ..BuildStats::default()
        };
        assert!(stats.is_clean());

        let stats = BuildStats {
            skipped_stop_refs: 1,
            ..BuildStats::default()
        };
        assert!(!stats.is_clean());
    }

    #[test]
    fn graph_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }
}
