//! In-memory transit network graph.
//!
//! Stops are stored in an arena and addressed by [`NodeIndex`]; each node
//! owns its outgoing edges, and every edge remembers the route (and line)
//! that produced it. Parallel edges are kept so that each line serving a
//! stop pair can still be reported.

mod builder;
mod graph;

pub use builder::build_graph;
pub use graph::{BuildStats, Edge, Graph, Node, NodeIndex, RouteTag};
