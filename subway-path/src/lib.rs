//! Shortest path and fare calculation for a multi-line subway network.
//!
//! Given a set of lines, two stations and a rider's age, this crate answers:
//! "what is the shortest route, how long is it, and what does it cost?"

pub mod domain;
pub mod dto;
pub mod fare;
pub mod graph;
pub mod path;
