//! Path query entry point.

use tracing::debug;

use super::error::PathError;
use super::search::{Dijkstra, Path, ShortestPath};
use crate::domain::{Line, Station};
use crate::dto::PathResponse;
use crate::fare::{Fare, FarePolicy};
use crate::graph::WeightedMultigraph;

/// Shortest path between two stations, priced for the lines it was found on.
///
/// The surcharge is the highest surcharge of *every* supplied line, whether
/// or not the path actually rides that line.
///
/// # Examples
///
/// ```
/// use subway_path::domain::{Distance, Line, Section, Station, StationId};
/// use subway_path::path::PathFinder;
///
/// let a = Station::new(StationId(1), "A");
/// let b = Station::new(StationId(2), "B");
/// let c = Station::new(StationId(3), "C");
/// let line = Line::new("Line 1", 0)
///     .with_section(Section::new(a.clone(), b.clone(), Distance(3)))
///     .with_section(Section::new(b.clone(), c.clone(), Distance(4)));
///
/// let finder = PathFinder::new(&a, &c, &[line]).unwrap();
/// let response = finder.find_shortest_path_to_response(20);
/// assert_eq!(response.distance, 7);
/// assert_eq!(response.fare, 1250);
/// ```
#[derive(Debug, Clone)]
pub struct PathFinder {
    path: Path<Station>,
    fare: Fare,
}

impl PathFinder {
    /// Find the shortest path with Dijkstra under the default fare policy.
    pub fn new(source: &Station, target: &Station, lines: &[Line]) -> Result<Self, PathError> {
        Self::with_strategy(source, target, lines, &Dijkstra, FarePolicy::default())
    }

    /// Find the shortest path with a custom strategy and fare policy.
    pub fn with_strategy<S: ShortestPath>(
        source: &Station,
        target: &Station,
        lines: &[Line],
        strategy: &S,
        policy: FarePolicy,
    ) -> Result<Self, PathError> {
        if source == target {
            return Err(PathError::InvalidRequest {
                station: source.id(),
            });
        }

        let fare = Fare::with_policy(max_surcharge(lines, &policy), policy);

        let graph = WeightedMultigraph::build(lines);
        let path = strategy
            .shortest_path(&graph, source, target)
            .map_err(|err| PathError::from_search(err, source.id(), target.id()))?;

        debug!(
            source = %source.id(),
            target = %target.id(),
            stations = path.vertices().len(),
            distance = path.distance(),
            "shortest path found"
        );

        Ok(Self { path, fare })
    }

    /// Stations on the path in travel order.
    pub fn stations(&self) -> &[Station] {
        self.path.vertices()
    }

    pub fn distance(&self) -> u32 {
        self.path.distance()
    }

    pub fn path(&self) -> &Path<Station> {
        &self.path
    }

    pub fn fare(&self) -> &Fare {
        &self.fare
    }

    /// Price the path for a rider of `age` and package the result.
    pub fn find_shortest_path_to_response(&self, age: u32) -> PathResponse {
        let distance = self.distance();
        let fare = self.fare.calculate_fare(age, distance);
        PathResponse::new(self.stations(), distance, fare)
    }
}

/// Highest surcharge among all lines, or the minimum fare if there are none.
fn max_surcharge(lines: &[Line], policy: &FarePolicy) -> u32 {
    lines
        .iter()
        .map(Line::surcharge)
        .max()
        .unwrap_or(policy.minimum_fare)
}
