//! Sections: weighted connections between adjacent stations.

use super::Station;

/// Distance of a section in kilometres.
///
/// Zero is accepted as-is; the station store is responsible for supplying
/// sensible values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Distance(pub u32);

impl Distance {
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A direct connection between an up-station and a down-station on one line.
///
/// The up/down naming only reflects the line's ordering; for routing the
/// section can be travelled in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    pub fn new(up_station: Station, down_station: Station, distance: Distance) -> Self {
        Self {
            up_station,
            down_station,
            distance,
        }
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}
