//! Weighted multigraph over stations.
//!
//! Every section of every supplied line becomes one undirected edge weighted
//! by its distance. Parallel edges between the same pair of stations are
//! kept; shortest-path search picks the cheapest.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::domain::{Line, Station};

/// One half of an undirected edge, as seen from its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the vertex at the other end.
    pub to: usize,
    pub weight: u64,
}

/// Undirected weighted multigraph.
///
/// Each edge is stored in both endpoints' adjacency lists for O(1) neighbour
/// lookup, so `edge_count` is tracked separately.
#[derive(Debug, Clone)]
pub struct WeightedMultigraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl<V> Default for WeightedMultigraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<V: Clone + Eq + Hash> WeightedMultigraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, returning its index. Adding a present vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an undirected edge, inserting missing endpoints first.
    pub fn add_edge(&mut self, a: V, b: V, weight: u64) {
        let a = self.add_vertex(a);
        let b = self.add_vertex(b);
        self.adjacency[a].push(Edge { to: b, weight });
        if a != b {
            self.adjacency[b].push(Edge { to: a, weight });
        }
        self.edge_count += 1;
    }

    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the vertex stored at `idx`, if any.
    pub fn vertex(&self, idx: usize) -> Option<&V> {
        self.vertices.get(idx)
    }

    /// Edges leaving the vertex at `idx`. Unknown indices have no edges.
    pub fn neighbours(&self, idx: usize) -> &[Edge] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl WeightedMultigraph<Station> {
    /// Build the network graph from every section of every line.
    ///
    /// No validation or deduplication is performed: overlapping sections
    /// from different lines all become separate edges.
    pub fn build(lines: &[Line]) -> Self {
        let mut graph = Self::new();

        for line in lines {
            for section in line.sections() {
                trace!(
                    line = line.name(),
                    up = %section.up_station().id(),
                    down = %section.down_station().id(),
                    distance = section.distance().get(),
                    "adding section"
                );
                graph.add_edge(
                    section.up_station().clone(),
                    section.down_station().clone(),
                    u64::from(section.distance().get()),
                );
            }
        }

        debug!(
            lines = lines.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "network graph built"
        );

        graph
    }
}
