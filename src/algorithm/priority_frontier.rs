use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

use crate::algorithm::traits::check_source;
use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::config::EngineConfig;
use crate::data_structures::{DistanceTable, SharedFrontier};
use crate::graph::Graph;
use crate::parallel::run_persistent;
use crate::Result;

/// Parallel Dijkstra over a lock-guarded shared min-heap
///
/// A fixed set of persistent workers claim the smallest `(distance, vertex)`
/// entry, discard it if a shorter distance has since been committed, and
/// otherwise relax its outgoing edges, pushing every improvement back onto
/// the frontier. A vertex may be expanded more than once before its final
/// distance is known, so the total work can exceed sequential Dijkstra.
///
/// The run ends when the frontier is empty and no worker is holding an
/// entry; see [`SharedFrontier`].
#[derive(Debug, Clone, Default)]
pub struct PriorityFrontier {
    config: EngineConfig,
}

impl PriorityFrontier {
    /// Create an engine with one worker per hardware thread
    pub fn new() -> Self {
        PriorityFrontier {
            config: EngineConfig::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        PriorityFrontier { config }
    }

    /// Set the number of persistent workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.config.threads = threads;
        self
    }
}

impl<G> ShortestPathAlgorithm<G> for PriorityFrontier
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "PriorityFrontier"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        check_source(graph, source)?;

        let workers = self.config.worker_count();
        debug!(
            "priority frontier: {} workers, {} vertices, {} edges, source {}",
            workers,
            graph.vertex_count(),
            graph.edge_count(),
            source
        );

        let distances = DistanceTable::new(graph.vertex_count(), source);
        let frontier = SharedFrontier::seeded(source);
        let expanded = AtomicUsize::new(0);

        run_persistent(workers, |worker| {
            let mut local_expanded = 0;

            while let Some((_active, u, _)) = frontier.claim(&distances) {
                local_expanded += 1;
                let dist_u = distances.get(u);

                for edge in graph.outgoing_edges(u) {
                    let candidate = dist_u.saturating_add(edge.weight);
                    if distances.relax(edge.to, candidate) {
                        frontier.push(edge.to, candidate);
                    }
                }
            }

            trace!("worker {} exiting after {} expansions", worker, local_expanded);
            expanded.fetch_add(local_expanded, Ordering::Relaxed);
        });

        debug!(
            "priority frontier done: {} expansions, {} stale entries discarded",
            expanded.into_inner(),
            frontier.discarded()
        );

        Ok(DistanceVector::new(source, distances.into_distances()))
    }
}
