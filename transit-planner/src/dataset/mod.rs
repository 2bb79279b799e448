//! Network dataset acquisition and lookup.
//!
//! A [`DataSource`] hands over a complete [`Dataset`] snapshot; a [`Store`]
//! indexes it for name lookups and feeds the graph builder.

mod error;
mod raw;
mod snapshot;
mod source;
mod store;

pub use error::DatasetError;
pub use raw::Dataset;
pub use snapshot::SnapshotFile;
pub use source::{DataSource, StaticSource};
pub use store::Store;
