//! Shared handle to the current network graph.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::dataset::{DataSource, DatasetError, Store};
use crate::network::{BuildStats, Graph};

use super::search::{SearchError, Step, find_path};

/// Thread-safe handle to the graph currently used for searches.
///
/// Cloning the handle shares the same slot. A refresh builds the new graph
/// entirely before publishing it, and searches already running keep the
/// `Arc` they started with, so no search ever sees a partial graph.
#[derive(Clone)]
pub struct NetworkHandle {
    current: Arc<RwLock<Arc<Graph>>>,
}

impl NetworkHandle {
    /// Create a handle serving `graph`.
    pub fn new(graph: Graph) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// Create a handle by fetching and building from a data source.
    ///
    /// This will fail if the source cannot provide a dataset.
    pub async fn load<S: DataSource>(source: &S) -> Result<Self, DatasetError> {
        let graph = build_from(source).await?;
        Ok(Self::new(graph))
    }

    /// The graph searches should currently use.
    pub async fn current(&self) -> Arc<Graph> {
        let guard = self.current.read().await;
        Arc::clone(&guard)
    }

    /// Publish a new graph, returning the one it replaces.
    pub async fn replace(&self, graph: Graph) -> Arc<Graph> {
        let graph = Arc::new(graph);
        let mut guard = self.current.write().await;
        std::mem::replace(&mut *guard, graph)
    }

    /// Rebuild the graph from the data source.
    ///
    /// On success, replaces the current graph and returns the new build
    /// statistics. On failure, the existing graph is preserved and the error
    /// is returned.
    pub async fn refresh<S: DataSource>(&self, source: &S) -> Result<BuildStats, DatasetError> {
        let graph = build_from(source).await?;
        let stats = *graph.stats();
        self.replace(graph).await;
        Ok(stats)
    }

    /// Find a path on the current graph.
    pub async fn find_path(&self, source: &str, target: &str) -> Result<Vec<Step>, SearchError> {
        let graph = self.current().await;
        find_path(&graph, source, target)
    }
}

async fn build_from<S: DataSource>(source: &S) -> Result<Graph, DatasetError> {
    let dataset = source.fetch().await?;
    let fetched_at = dataset.fetched_at;
    let graph = Store::new(dataset).build_graph();
    let stats = graph.stats();

    info!(
        stops = graph.len(),
        edges = stats.edges,
        routes = stats.routes,
        skipped_stop_refs = stats.skipped_stop_refs,
        routes_without_line = stats.routes_without_line,
        duplicate_stop_names = stats.duplicate_stop_names,
        fetched_at = ?fetched_at,
        "Network graph built"
    );

    Ok(graph)
}
