//! Stop-to-stop path search.
//!
//! Breadth-first search over the stop graph, so the path found is the one
//! with the fewest hops. All traversal state lives in side tables local to a
//! single call; the graph itself is never touched.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::domain::{Line, RouteId, Stop};
use crate::network::{Edge, Graph, NodeIndex};

/// Which end of a search a stop name was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRole {
    Source,
    Target,
}

impl fmt::Display for StopRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopRole::Source => f.write_str("source"),
            StopRole::Target => f.write_str("target"),
        }
    }
}

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A stop name does not exist in the network.
    #[error("{role} stop {name:?} was not found")]
    StopNotFound { role: StopRole, name: String },

    /// Both stops exist but the target cannot be reached from the source.
    #[error("no path found from {from:?} to {to:?}")]
    NoPathFound { from: String, to: String },
}

/// One leg of a path: a single edge traversal with its route context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub from: Stop,
    pub to: Stop,
    /// Owning line of the route, if the dataset could resolve it.
    pub line: Option<Line>,
    pub route: RouteId,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (", self.from, self.to)?;
        match &self.line {
            Some(line) => write!(f, "line {}", line)?,
            None => f.write_str("unknown line")?,
        }
        write!(f, ", route {})", self.route)
    }
}

/// How the search first reached a node.
#[derive(Clone, Copy)]
struct Arrival<'g> {
    from: NodeIndex,
    edge: &'g Edge,
}

/// Find the path with the fewest hops between two named stops.
///
/// Returns one [`Step`] per edge in travel order; an empty path when source
/// and target are the same stop. Among several shortest paths the one whose
/// edges were discovered first wins, i.e. the order routes were added to the
/// graph decides ties. No other metric (line changes, distance) is
/// considered.
pub fn find_path(graph: &Graph, source: &str, target: &str) -> Result<Vec<Step>, SearchError> {
    let start = graph
        .node_for(source)
        .ok_or_else(|| SearchError::StopNotFound {
            role: StopRole::Source,
            name: source.to_string(),
        })?;
    let end = graph
        .node_for(target)
        .ok_or_else(|| SearchError::StopNotFound {
            role: StopRole::Target,
            name: target.to_string(),
        })?;

    debug!(source, target, "Starting path search");

    if start == end {
        return Ok(Vec::new());
    }

    let arrivals = search(graph, start, end).ok_or_else(|| SearchError::NoPathFound {
        from: source.to_string(),
        to: target.to_string(),
    })?;

    let steps = reconstruct(graph, &arrivals, end);
    debug!(source, target, hops = steps.len(), "Path found");
    Ok(steps)
}

/// Run the BFS. Returns the arrival table once `end` is reached.
fn search<'g>(
    graph: &'g Graph,
    start: NodeIndex,
    end: NodeIndex,
) -> Option<Vec<Option<Arrival<'g>>>> {
    let mut visited = vec![false; graph.len()];
    let mut arrivals: Vec<Option<Arrival<'g>>> = vec![None; graph.len()];
    let mut frontier = VecDeque::new();

    visited[start.0] = true;
    frontier.push_back(start);

    while let Some(node) = frontier.pop_front() {
        if node == end {
            return Some(arrivals);
        }

        for edge in graph.edges_from(node) {
            if visited[edge.to.0] {
                continue;
            }
            trace!(from = node.0, to = edge.to.0, "Visiting");
            visited[edge.to.0] = true;
            arrivals[edge.to.0] = Some(Arrival { from: node, edge });
            frontier.push_back(edge.to);
        }
    }

    None
}

/// Walk arrival records back from `end` and emit steps in travel order.
fn reconstruct(graph: &Graph, arrivals: &[Option<Arrival<'_>>], end: NodeIndex) -> Vec<Step> {
    let mut edges = Vec::new();
    let mut cursor = end;
    while let Some(arrival) = arrivals[cursor.0] {
        edges.push(arrival.edge);
        cursor = arrival.from;
    }

    edges
        .into_iter()
        .rev()
        .filter_map(|edge| {
            let tag = graph.tag(edge)?;
            Some(Step {
                from: graph.stop(edge.from)?.clone(),
                to: graph.stop(edge.to)?.clone(),
                line: tag.line.clone(),
                route: tag.route.clone(),
            })
        })
        .collect()
}

/// Lines used by a path, in first-use order, without repeats.
///
/// Steps on routes with no known line are ignored. Useful for callers that
/// only want to accept single-line answers.
pub fn distinct_lines(steps: &[Step]) -> Vec<&Line> {
    let mut lines: Vec<&Line> = Vec::new();
    for line in steps.iter().filter_map(|s| s.line.as_ref()) {
        if !lines.iter().any(|l| l.id == line.id) {
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
