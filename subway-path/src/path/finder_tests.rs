//! Scenario tests for path queries.

use std::cell::Cell;
use std::hash::Hash;

use super::*;
use crate::domain::{Distance, Line, Section, Station, StationId};
use crate::fare::FarePolicy;
use crate::graph::WeightedMultigraph;

fn station(id: u64) -> Station {
    Station::new(StationId(id), format!("S{id}"))
}

fn section(up: u64, down: u64, distance: u32) -> Section {
    Section::new(station(up), station(down), Distance(distance))
}

fn line(name: &str, surcharge: u32, sections: &[(u64, u64, u32)]) -> Line {
    sections
        .iter()
        .fold(Line::new(name, surcharge), |line, &(up, down, d)| {
            line.with_section(section(up, down, d))
        })
}

fn ids(stations: &[Station]) -> Vec<u64> {
    stations.iter().map(|s| s.id().0).collect()
}

/// Strategy that counts calls and delegates to Dijkstra.
#[derive(Default)]
struct CountingStrategy {
    calls: Cell<usize>,
}

impl ShortestPath for CountingStrategy {
    fn shortest_path<V>(
        &self,
        graph: &WeightedMultigraph<V>,
        source: &V,
        target: &V,
    ) -> Result<Path<V>, SearchError>
    where
        V: Clone + Eq + Hash,
    {
        self.calls.set(self.calls.get() + 1);
        Dijkstra.shortest_path(graph, source, target)
    }
}

#[test]
fn single_line_adult_short_trip() {
    let lines = [line("1", 0, &[(1, 2, 3), (2, 3, 4)])];
    let finder = PathFinder::new(&station(1), &station(3), &lines).unwrap();
    let response = finder.find_shortest_path_to_response(20);

    assert_eq!(ids(finder.stations()), vec![1, 2, 3]);
    assert_eq!(response.distance, 7);
    assert_eq!(response.fare, 1250);
    let response_ids: Vec<u64> = response.stations.iter().map(|s| s.id).collect();
    assert_eq!(response_ids, vec![1, 2, 3]);
}

#[test]
fn line_surcharge_is_added() {
    let lines = [line("1", 500, &[(1, 2, 3), (2, 3, 4)])];
    let finder = PathFinder::new(&station(1), &station(3), &lines).unwrap();

    assert_eq!(finder.find_shortest_path_to_response(20).fare, 1750);
    assert_eq!(finder.fare().base(), 1750);
}

#[test]
fn distance_over_ten_adds_increment() {
    let lines = [line("1", 0, &[(1, 2, 5), (2, 3, 7)])];
    let response = PathFinder::new(&station(1), &station(3), &lines)
        .unwrap()
        .find_shortest_path_to_response(20);

    assert_eq!(response.distance, 12);
    assert_eq!(response.fare, 1350);
}

#[test]
fn child_and_infant_fares() {
    let lines = [line("1", 0, &[(1, 2, 10)])];
    let finder = PathFinder::new(&station(1), &station(2), &lines).unwrap();

    assert_eq!(finder.find_shortest_path_to_response(10).fare, 450);
    assert_eq!(finder.find_shortest_path_to_response(5).fare, 0);
    assert_eq!(finder.find_shortest_path_to_response(15).fare, 720);
}

#[test]
fn same_station_rejected_before_search() {
    let lines = [line("1", 0, &[(1, 2, 3)])];
    let strategy = CountingStrategy::default();

    let err = PathFinder::with_strategy(
        &station(1),
        &station(1),
        &lines,
        &strategy,
        FarePolicy::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PathError::InvalidRequest {
            station: StationId(1)
        }
    );
    assert!(err.is_client_error());
    assert_eq!(strategy.calls.get(), 0);
}

#[test]
fn custom_strategy_is_used() {
    let lines = [line("1", 0, &[(1, 2, 3)])];
    let strategy = CountingStrategy::default();

    let finder = PathFinder::with_strategy(
        &station(1),
        &station(2),
        &lines,
        &strategy,
        FarePolicy::default(),
    )
    .unwrap();

    assert_eq!(strategy.calls.get(), 1);
    assert_eq!(finder.distance(), 3);
}

#[test]
fn disconnected_lines_have_no_path() {
    let lines = [
        line("1", 0, &[(1, 2, 3)]),
        line("2", 0, &[(3, 4, 3)]),
    ];
    let err = PathFinder::new(&station(1), &station(4), &lines).unwrap_err();
    assert_eq!(
        err,
        PathError::NoPath {
            from: StationId(1),
            to: StationId(4)
        }
    );
    assert_eq!(err.to_string(), "no path between station 1 and station 4");
}

#[test]
fn unknown_station_has_no_path() {
    let lines = [line("1", 0, &[(1, 2, 3)])];
    let err = PathFinder::new(&station(1), &station(99), &lines).unwrap_err();
    assert_eq!(
        err,
        PathError::NoPath {
            from: StationId(1),
            to: StationId(99)
        }
    );
}

#[test]
fn no_lines_has_no_path() {
    let err = PathFinder::new(&station(1), &station(2), &[]).unwrap_err();
    assert!(matches!(err, PathError::NoPath { .. }));
}

#[test]
fn transfer_between_lines() {
    // 1 -2- 2 -2- 3 on line A, 3 -2- 4 on line B, with a long direct 1-4 on line C
    let lines = [
        line("A", 0, &[(1, 2, 2), (2, 3, 2)]),
        line("B", 0, &[(3, 4, 2)]),
        line("C", 0, &[(1, 4, 20)]),
    ];
    let finder = PathFinder::new(&station(1), &station(4), &lines).unwrap();

    assert_eq!(ids(finder.stations()), vec![1, 2, 3, 4]);
    assert_eq!(finder.distance(), 6);
}

#[test]
fn overlapping_sections_pick_shortest() {
    let lines = [
        line("slow", 0, &[(1, 2, 9)]),
        line("fast", 0, &[(2, 1, 4)]),
    ];
    let finder = PathFinder::new(&station(1), &station(2), &lines).unwrap();
    assert_eq!(finder.distance(), 4);
}

#[test]
fn max_surcharge_applies_even_off_path() {
    // The path only rides line "1" but line "express" carries the highest surcharge
    let lines = [
        line("1", 100, &[(1, 2, 3)]),
        line("express", 900, &[(5, 6, 3)]),
        line("2", 300, &[(7, 8, 3)]),
    ];
    let finder = PathFinder::new(&station(1), &station(2), &lines).unwrap();

    assert_eq!(finder.fare().surcharge(), 900);
    assert_eq!(finder.find_shortest_path_to_response(20).fare, 2150);
}

#[test]
fn custom_fare_policy() {
    let lines = [line("1", 0, &[(1, 2, 3)])];
    let policy = FarePolicy {
        default_fare: 1000,
        ..FarePolicy::default()
    };
    let finder =
        PathFinder::with_strategy(&station(1), &station(2), &lines, &Dijkstra, policy).unwrap();

    assert_eq!(finder.find_shortest_path_to_response(30).fare, 1000);
}

#[test]
fn repeated_queries_agree() {
    let lines = [
        line("A", 200, &[(1, 2, 6), (2, 3, 6), (3, 4, 6)]),
        line("B", 0, &[(1, 5, 9), (5, 4, 9)]),
    ];
    let first = PathFinder::new(&station(1), &station(4), &lines)
        .unwrap()
        .find_shortest_path_to_response(17);
    let second = PathFinder::new(&station(1), &station(4), &lines)
        .unwrap()
        .find_shortest_path_to_response(17);

    assert_eq!(first.distance, second.distance);
    assert_eq!(first.fare, second.fare);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Random lines over stations 1..=8 with small distances and surcharges.
    fn lines() -> impl Strategy<Value = Vec<Line>> {
        prop::collection::vec(
            (
                0u32..1000,
                prop::collection::vec((1u64..=8, 1u64..=8, 1u32..20), 1..6),
            ),
            1..4,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (surcharge, sections))| {
                    line(&format!("L{i}"), surcharge, &sections)
                })
                .collect()
        })
    }

    /// Shortest section distance directly joining `a` and `b` in any line.
    fn section_distance(lines: &[Line], a: &Station, b: &Station) -> Option<u32> {
        lines
            .iter()
            .flat_map(|l| l.sections())
            .filter(|s| {
                (s.up_station() == a && s.down_station() == b)
                    || (s.up_station() == b && s.down_station() == a)
            })
            .map(|s| s.distance().get())
            .min()
    }

    proptest! {
        /// The same station is always rejected
        #[test]
        fn same_station_always_invalid(lines in lines(), id in 1u64..=8) {
            let result = PathFinder::new(&station(id), &station(id), &lines);
            let rejected = matches!(
                result,
                Err(PathError::InvalidRequest { station }) if station == StationId(id)
            );
            prop_assert!(rejected);
        }

        /// Returned distance equals the section distances along the returned stations
        #[test]
        fn distance_matches_sections(lines in lines(), s in 1u64..=8, t in 1u64..=8) {
            prop_assume!(s != t);
            if let Ok(finder) = PathFinder::new(&station(s), &station(t), &lines) {
                let mut total = 0;
                for pair in finder.stations().windows(2) {
                    let d = section_distance(&lines, &pair[0], &pair[1]);
                    prop_assert!(d.is_some());
                    total += d.unwrap_or_default();
                }
                prop_assert_eq!(total, finder.distance());
            }
        }

        /// Surcharge is the global maximum across all lines
        #[test]
        fn surcharge_is_global_max(lines in lines(), s in 1u64..=8, t in 1u64..=8) {
            prop_assume!(s != t);
            if let Ok(finder) = PathFinder::new(&station(s), &station(t), &lines) {
                let expected = lines.iter().map(Line::surcharge).max().unwrap_or(0);
                prop_assert_eq!(finder.fare().surcharge(), expected);
            }
        }
    }
}
