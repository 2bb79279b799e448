//! Data source abstraction.

use std::future::Future;

use super::error::DatasetError;
use super::raw::Dataset;

/// Trait for providing the network dataset.
///
/// This abstraction keeps acquisition (remote API, snapshot file, fixtures)
/// out of graph building and search. It is queried once per graph build and
/// may be slow or fail; callers keep serving the previous graph meanwhile.
pub trait DataSource {
    /// Fetch a complete dataset snapshot.
    fn fetch(&self) -> impl Future<Output = Result<Dataset, DatasetError>> + Send;
}

/// In-memory data source that always returns the same dataset.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    /// Create a source serving `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for StaticSource {
    async fn fetch(&self) -> Result<Dataset, DatasetError> {
        Ok(self.dataset.clone())
    }
}
