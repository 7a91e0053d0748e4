//! Domain types for the subway network.
//!
//! Stations, sections and lines are owned by an external store and handed to
//! this crate as immutable snapshots for the duration of one query.

mod line;
mod section;
mod station;

pub use line::Line;
pub use section::{Distance, Section};
pub use station::{Station, StationId};
