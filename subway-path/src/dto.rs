//! Serializable query results for the HTTP layer.

use serde::Serialize;

use crate::domain::Station;

/// A station on the returned path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().to_string(),
        }
    }
}

/// Result of a path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResponse {
    /// Stations in travel order, source first
    pub stations: Vec<StationResponse>,

    /// Total distance in km
    pub distance: u32,

    /// Fare after surcharge and age discount
    pub fare: u32,
}

impl PathResponse {
    pub fn new(stations: &[Station], distance: u32, fare: u32) -> Self {
        Self {
            stations: stations.iter().map(StationResponse::from).collect(),
            distance,
            fare,
        }
    }
}
