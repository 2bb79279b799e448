//! Stop-to-stop path planning.
//!
//! Answers "how do I get from stop A to stop B" with the fewest hops, using
//! breadth-first search over the network graph. Line-change policy (e.g.
//! only accepting single-line answers) is left to the caller.

mod config;
mod handle;
mod search;

pub use config::{ConfigError, PlannerConfig, REFRESH_ENV, SNAPSHOT_ENV};
pub use handle::NetworkHandle;
pub use search::{SearchError, Step, StopRole, distinct_lines, find_path};
