use num_traits::PrimInt;

use crate::graph::traits::{Edge, Graph};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Built once with [`DirectedGraph::build`], which rejects out-of-range
/// endpoints and negative weights; there is no way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<Edge>>,

    /// Total number of edges
    edge_count: usize,

    /// Largest weight seen during construction
    max_weight: u64,
}

impl DirectedGraph {
    /// Creates a graph with the given number of vertices and no edges
    pub fn with_vertices(vertex_count: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertex_count],
            edge_count: 0,
            max_weight: 0,
        }
    }

    /// Builds a graph from a vertex count and `(from, to, weight)` records
    ///
    /// Any primitive integer weight type is accepted. Every endpoint must lie
    /// in `0..vertex_count` and every weight must be non-negative.
    pub fn build<W, I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        W: PrimInt,
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = DirectedGraph::with_vertices(vertex_count);

        for (from, to, weight) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidGraph {
                    from,
                    to,
                    vertex_count,
                });
            }
            if weight < W::zero() {
                return Err(Error::NegativeWeight {
                    from,
                    to,
                    weight: weight.to_i128().unwrap_or(i128::MIN),
                });
            }
            let weight = weight
                .to_u64()
                .ok_or(Error::WeightOutOfRange { from, to })?;

            graph.outgoing_edges[from].push(Edge::new(to, weight));
            graph.edge_count += 1;
            graph.max_weight = graph.max_weight.max(weight);
        }

        Ok(graph)
    }

    /// Returns an iterator over all edges as `(from, to, weight)` records
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e.to, e.weight)))
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge] {
        self.outgoing_edges
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn max_weight(&self) -> u64 {
        self.max_weight
    }
}
