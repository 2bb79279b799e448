//! Transit network pathfinder.
//!
//! Answers "how do I get from stop A to stop B" over a public-transit
//! network: a directed graph is built from the stop sequences of every
//! route, and the path with the fewest hops is found by breadth-first
//! search.

pub mod dataset;
pub mod domain;
pub mod network;
pub mod planner;
