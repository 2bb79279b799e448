//! Domain types for the transit network.
//!
//! These are the records a data source hands over: stops, lines, routes and
//! the ordered stop sequence of each route. They carry no graph structure;
//! see [`crate::network`] for that.

mod id;
mod line;
mod route;
mod stop;

pub use id::{LineId, RouteId, StopId};
pub use line::Line;
pub use route::{Route, RouteDetails};
pub use stop::Stop;
