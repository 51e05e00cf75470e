use std::fmt;

use crate::graph::Graph;
use crate::{Distance, Error, Result};

/// Final distances from a single source, ordered by vertex id
///
/// Unreachable vertices hold `None`. The `Display` rendering writes one
/// `<vertex> <distance>` line per vertex with `-1` for unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceVector {
    /// Distances from source to each vertex
    pub distances: Vec<Option<Distance>>,

    /// Source vertex ID
    pub source: usize,
}

impl DistanceVector {
    pub fn new(source: usize, distances: Vec<Option<Distance>>) -> Self {
        DistanceVector { distances, source }
    }

    /// Distance to `vertex`, `None` if unreachable or out of range
    pub fn get(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Distance>> + '_ {
        self.distances.iter().copied()
    }

    /// One `(vertex, distance)` record per vertex, in vertex order
    pub fn records(&self) -> impl Iterator<Item = (usize, Option<Distance>)> + '_ {
        self.iter().enumerate()
    }

    pub fn into_inner(self) -> Vec<Option<Distance>> {
        self.distances
    }
}

impl fmt::Display for DistanceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, distance) in self.records() {
            match distance {
                Some(d) => writeln!(f, "{} {}", vertex, d)?,
                None => writeln!(f, "{} -1", vertex)?,
            }
        }
        Ok(())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest path distances from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Rejects a source outside the graph
pub(crate) fn check_source<G: Graph>(graph: &G, source: usize) -> Result<()> {
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(Error::SourceOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count(),
        })
    }
}
