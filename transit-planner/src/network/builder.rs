//! Graph construction from route stop sequences.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::domain::{Line, RouteDetails, RouteId, Stop};

use super::graph::{BuildStats, Edge, Graph, Node, NodeIndex, RouteTag};

/// Build the stop graph for a dataset snapshot.
///
/// Every stop becomes a node. Routes are walked in ascending id order and
/// each pair of directly consecutive, resolvable stops yields an edge (two
/// when the route has `wayback` set). A stop name that matches no stop is
/// skipped and breaks the chain, so a route never links across it.
///
/// A route with no entry in `lines` still contributes edges, tagged with no
/// line. Nothing here fails: inconsistencies are logged and counted in
/// [`Graph::stats`].
///
/// When two stops share a name the later one wins the name index and the
/// earlier node is left unreachable.
pub fn build_graph(
    stops: &[Stop],
    routes: &BTreeMap<RouteId, RouteDetails>,
    lines: &HashMap<RouteId, Line>,
) -> Graph {
    let mut stats = BuildStats::default();
    let mut nodes = Vec::with_capacity(stops.len());
    let mut by_name = HashMap::with_capacity(stops.len());

    for stop in stops {
        let index = NodeIndex(nodes.len());
        nodes.push(Node {
            stop: stop.clone(),
            edges: Vec::new(),
        });

        if stop.name.is_empty() {
            stats.unnamed_stops += 1;
            warn!(stop_id = %stop.id, "Stop has no name, not indexed");
            continue;
        }

        if let Some(previous) = by_name.insert(stop.name.clone(), index) {
            stats.duplicate_stop_names += 1;
            warn!(
                name = %stop.name,
                shadowed = %nodes[previous.0].stop.id,
                kept = %stop.id,
                "Duplicate stop name, later stop wins"
            );
        }
    }

    let mut tags = Vec::with_capacity(routes.len());

    for (route_id, details) in routes {
        stats.routes += 1;

        let line = lines.get(route_id).cloned();
        if line.is_none() {
            stats.routes_without_line += 1;
            warn!(route = %route_id, "No line found for route");
        }

        let tag = tags.len();
        tags.push(RouteTag {
            route: route_id.clone(),
            line,
        });

        let mut previous: Option<NodeIndex> = None;
        for name in &details.stops {
            let Some(&current) = by_name.get(name.as_str()) else {
                stats.skipped_stop_refs += 1;
                debug!(route = %route_id, stop = %name, "Route references unknown stop");
                previous = None;
                continue;
            };

            if let Some(prev) = previous {
                link(&mut nodes, prev, current, tag);
                stats.edges += 1;
                if details.wayback {
                    link(&mut nodes, current, prev, tag);
                    stats.edges += 1;
                }
            }
            previous = Some(current);
        }
    }

    debug!(
        nodes = nodes.len(),
        edges = stats.edges,
        routes = stats.routes,
        skipped_stop_refs = stats.skipped_stop_refs,
        routes_without_line = stats.routes_without_line,
        "Built stop graph"
    );

    Graph {
        nodes,
        by_name,
        tags,
        stats,
    }
}

fn link(nodes: &mut [Node], from: NodeIndex, to: NodeIndex, tag: usize) {
    nodes[from.0].edges.push(Edge { from, to, tag });
}
