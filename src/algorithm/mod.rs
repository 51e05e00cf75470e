pub mod traits;
pub mod dial;
pub mod dijkstra;
pub mod engine;
pub mod iterative;
pub mod priority_frontier;

pub use traits::{DistanceVector, ShortestPathAlgorithm};
