//! Shortest-path search between two stations.
//!
//! [`PathFinder`] is the query entry point: it rejects degenerate requests,
//! builds the network graph from the supplied lines, runs a
//! [`ShortestPath`] strategy (Dijkstra by default) and prices the result.

mod error;
mod finder;
mod search;

#[cfg(test)]
mod finder_tests;

pub use error::PathError;
pub use finder::PathFinder;
pub use search::{Dijkstra, Path, SearchError, ShortestPath};
