//! Par SSSP - shared-memory parallel single-source shortest paths
//!
//! This library computes single-source shortest path distances over weighted
//! directed graphs with non-negative integer weights, using one of three
//! parallel relaxation strategies over a shared atomic distance table:
//!
//! - [`PriorityFrontier`]: persistent workers draining a lock-guarded min-heap
//!   with lazy deletion of stale entries.
//! - [`DialBuckets`]: Dial's bucket queue, each bucket relaxed in a parallel wave.
//! - [`IterativeRelaxation`]: Bellman-Ford style fixpoint over all vertices.
//!
//! A sequential [`Dijkstra`] is included as a reference.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod parallel;

pub use algorithm::{
    dial::DialBuckets, dijkstra::Dijkstra, engine::Engine, engine::Strategy,
    iterative::IterativeRelaxation, priority_frontier::PriorityFrontier, DistanceVector,
    ShortestPathAlgorithm,
};
pub use config::EngineConfig;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Tentative or final distance from the source
pub type Distance = u64;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid graph: edge {from} -> {to} leaves the vertex range 0..{vertex_count}")]
    InvalidGraph {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: i128 },

    #[error("Edge weight on {from} -> {to} does not fit in 64 bits")]
    WeightOutOfRange { from: usize, to: usize },

    #[error("Source vertex {vertex} not in graph with {vertex_count} vertices")]
    SourceOutOfRange { vertex: usize, vertex_count: usize },

    #[error("Resource exhausted: bucket table needs {requested} bytes, limit is {limit}")]
    ResourceExhausted { requested: u128, limit: usize },

    #[error("No fixpoint after {waves} relaxation waves")]
    Divergence { waves: usize },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
