use std::fmt;

use crate::algorithm::{
    dial::DialBuckets, dijkstra::Dijkstra, iterative::IterativeRelaxation,
    priority_frontier::PriorityFrontier, DistanceVector, ShortestPathAlgorithm,
};
use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::Result;

/// Relaxation strategy selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Persistent workers over a lock-guarded min-heap
    PriorityFrontier,
    /// Dial's bucket queue, one parallel wave per bucket
    Buckets,
    /// Parallel Bellman-Ford style fixpoint
    Iterative,
    /// Single-threaded Dijkstra
    Sequential,
}

impl Strategy {
    /// The three parallel strategies
    pub const PARALLEL: [Strategy; 3] = [
        Strategy::PriorityFrontier,
        Strategy::Buckets,
        Strategy::Iterative,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::PriorityFrontier => "priority-frontier",
            Strategy::Buckets => "buckets",
            Strategy::Iterative => "iterative",
            Strategy::Sequential => "sequential",
        };
        f.write_str(name)
    }
}

/// Entry point that runs the selected strategy under a shared configuration
///
/// An engine holds no per-run state and can be reused for any number of
/// graphs and sources.
#[derive(Debug, Clone)]
pub struct Engine {
    strategy: Strategy,
    config: EngineConfig,
}

impl Engine {
    pub fn new(strategy: Strategy) -> Self {
        Engine {
            strategy,
            config: EngineConfig::new(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes distances from `source` to every vertex of `graph`
    pub fn run<G: Graph>(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        let config = self.config.clone();
        match self.strategy {
            Strategy::PriorityFrontier => {
                PriorityFrontier::with_config(config).compute_shortest_paths(graph, source)
            }
            Strategy::Buckets => DialBuckets::with_config(config).compute_shortest_paths(graph, source),
            Strategy::Iterative => {
                IterativeRelaxation::with_config(config).compute_shortest_paths(graph, source)
            }
            Strategy::Sequential => Dijkstra::new().compute_shortest_paths(graph, source),
        }
    }
}

impl<G> ShortestPathAlgorithm<G> for Engine
where
    G: Graph,
{
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        self.run(graph, source)
    }

    fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::PriorityFrontier => "PriorityFrontier",
            Strategy::Buckets => "DialBuckets",
            Strategy::Iterative => "IterativeRelaxation",
            Strategy::Sequential => "Dijkstra",
        }
    }
}
