use std::fmt::Debug;

/// An outgoing edge, owned by the adjacency list of its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Target vertex
    pub to: usize,

    /// Non-negative edge weight
    pub weight: u64,
}

impl Edge {
    pub fn new(to: usize, weight: u64) -> Self {
        Edge { to, weight }
    }
}

/// Trait representing an immutable weighted directed graph
///
/// Engines share the graph across worker threads, so implementations are
/// expected to be read-only after construction.
pub trait Graph: Debug + Sync {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex, in insertion order
    ///
    /// Vertices outside the graph have no edges.
    fn outgoing_edges(&self, vertex: usize) -> &[Edge];

    /// Returns the largest edge weight, or zero for an edgeless graph
    fn max_weight(&self) -> u64;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the number of outgoing edges of a vertex
    fn out_degree(&self, vertex: usize) -> usize {
        self.outgoing_edges(vertex).len()
    }
}
