//! Shortest-path strategies over a [`WeightedMultigraph`].

use std::hash::Hash;

use pathfinding::prelude::dijkstra;

use crate::graph::WeightedMultigraph;

/// Why a strategy could not produce a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Source and target are the same vertex
    #[error("source and target are the same vertex")]
    SameVertex,

    /// Target is not reachable from source, or either is absent from the graph
    #[error("target is unreachable from source")]
    Unreachable,
}

/// A route through the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<V> {
    /// Vertices in travel order, source first and target last.
    vertices: Vec<V>,

    /// Sum of the traversed edge weights.
    weight: u64,
}

impl<V> Path<V> {
    pub fn new(vertices: Vec<V>, weight: u64) -> Self {
        Self { vertices, weight }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Total weight as an integer distance, saturating at `u32::MAX`.
    pub fn distance(&self) -> u32 {
        u32::try_from(self.weight).unwrap_or(u32::MAX)
    }
}

/// A single-source shortest-path strategy.
///
/// This abstraction allows the finder to be tested with canned paths.
pub trait ShortestPath {
    /// Find a minimum-weight path from `source` to `target`.
    ///
    /// Fails with [`SearchError::Unreachable`] if either vertex is absent
    /// from the graph or the two are disconnected.
    fn shortest_path<V>(
        &self,
        graph: &WeightedMultigraph<V>,
        source: &V,
        target: &V,
    ) -> Result<Path<V>, SearchError>
    where
        V: Clone + Eq + Hash;
}

/// Dijkstra's algorithm over non-negative edge weights.
///
/// Ties between equal-weight routes are broken arbitrarily.
///
/// # Examples
///
/// ```
/// use subway_path::graph::WeightedMultigraph;
/// use subway_path::path::{Dijkstra, ShortestPath};
///
/// let mut graph = WeightedMultigraph::new();
/// graph.add_edge("A", "B", 3);
/// graph.add_edge("B", "C", 4);
/// graph.add_edge("A", "C", 10);
///
/// let path = Dijkstra.shortest_path(&graph, &"A", &"C").unwrap();
/// assert_eq!(path.vertices(), &["A", "B", "C"]);
/// assert_eq!(path.distance(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl ShortestPath for Dijkstra {
    fn shortest_path<V>(
        &self,
        graph: &WeightedMultigraph<V>,
        source: &V,
        target: &V,
    ) -> Result<Path<V>, SearchError>
    where
        V: Clone + Eq + Hash,
    {
        if source == target {
            return Err(SearchError::SameVertex);
        }

        let start = graph.index_of(source).ok_or(SearchError::Unreachable)?;
        let goal = graph.index_of(target).ok_or(SearchError::Unreachable)?;

        let (indices, weight) = dijkstra(
            &start,
            move |&idx| graph.neighbours(idx).iter().map(|e| (e.to, e.weight)),
            |&idx| idx == goal,
        )
        .ok_or(SearchError::Unreachable)?;

        let vertices = indices
            .into_iter()
            .filter_map(|idx| graph.vertex(idx).cloned())
            .collect();

        Ok(Path::new(vertices, weight))
    }
}
