//! JSON snapshot file data source.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::DatasetError;
use super::raw::Dataset;
use super::source::DataSource;

/// A dataset stored as JSON on disk.
///
/// Typically written once from upstream data and then used as the data
/// source for every graph build.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a snapshot source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot.
    pub fn load(&self) -> Result<Dataset, DatasetError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let dataset: Dataset = serde_json::from_str(&contents)?;

        debug!(
            path = %self.path.display(),
            stops = dataset.stops.len(),
            routes = dataset.route_count(),
            "Loaded dataset snapshot"
        );

        Ok(dataset)
    }

    /// Write the snapshot.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, dataset: &Dataset) -> Result<(), DatasetError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(dataset)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> DatasetError {
        DatasetError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DataSource for SnapshotFile {
    async fn fetch(&self) -> Result<Dataset, DatasetError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, Route, RouteDetails, RouteId, Stop};
    use std::collections::BTreeMap;

    fn sample() -> Dataset {
        Dataset {
            fetched_at: None,
            stops: vec![Stop::new("1", "Sablons"), Stop::new("2", "Longemalle")],
            lines: vec![Line::new("L1", "Line 1", "1")],
            routes_by_line_id: BTreeMap::from([(
                LineId::from("L1"),
                vec![Route::new("R1", "Sablons - Longemalle")],
            )]),
            route_details_by_route_id: BTreeMap::from([(
                RouteId::from("R1"),
                RouteDetails::new(["Sablons", "Longemalle"], true),
            )]),
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("dataset.json"));

        snapshot.save(&sample()).unwrap();

        assert_eq!(snapshot.load().unwrap(), sample());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache").join("nested").join("dataset.json");
        let snapshot = SnapshotFile::new(&path);

        snapshot.save(&sample()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("absent.json"));

        let err = snapshot.load().unwrap_err();

        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SnapshotFile::new(&path).load().unwrap_err();

        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[tokio::test]
    async fn fetch_reads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("dataset.json"));
        snapshot.save(&sample()).unwrap();

        let dataset = snapshot.fetch().await.unwrap();

        assert_eq!(dataset.stops.len(), 2);
    }
}
