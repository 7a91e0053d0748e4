//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier of a station in the external station store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station in the network.
///
/// Stations are compared and hashed by identity only, so two values with the
/// same id are the same graph vertex even if their names differ.
///
/// # Examples
///
/// ```
/// use subway_path::domain::{Station, StationId};
///
/// let a = Station::new(StationId(1), "Gangnam");
/// let b = Station::new(StationId(1), "Gangnam (renamed)");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station with the given identity and display name.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
