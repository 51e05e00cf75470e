use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace, warn};

use crate::algorithm::traits::check_source;
use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::config::EngineConfig;
use crate::data_structures::DistanceTable;
use crate::graph::Graph;
use crate::parallel::WavePool;
use crate::{Error, Result};

/// Bellman-Ford style fixpoint, parallel over every vertex each wave
///
/// Each wave expands every reached vertex that is not settled: it is marked
/// settled and its outgoing edges relaxed. A successful relaxation unsettles
/// the target so it is expanded again with its new distance. The run ends
/// after the first wave with no improvement. Every wave scans all vertices,
/// so this does far more work than the ordered engines.
#[derive(Debug, Clone, Default)]
pub struct IterativeRelaxation {
    config: EngineConfig,
}

impl IterativeRelaxation {
    pub fn new() -> Self {
        IterativeRelaxation {
            config: EngineConfig::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        IterativeRelaxation { config }
    }

    /// Set an explicit wave cap
    pub fn with_max_waves(mut self, max_waves: usize) -> Self {
        self.config.max_waves = Some(max_waves);
        self
    }
}

impl<G> ShortestPathAlgorithm<G> for IterativeRelaxation
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "IterativeRelaxation"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        check_source(graph, source)?;

        let n = graph.vertex_count();
        // Non-negative weights settle every vertex within n waves.
        let max_waves = self.config.max_waves.unwrap_or(n).max(1);
        let pool = WavePool::new(self.config.worker_count())?;

        debug!(
            "iterative relaxation: {} threads, {} vertices, {} edges, wave cap {}",
            pool.threads(),
            n,
            graph.edge_count(),
            max_waves
        );

        let distances = DistanceTable::new(n, source);
        let settled: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();

        let mut waves = 0;
        loop {
            if waves == max_waves {
                warn!("no fixpoint after {} waves", waves);
                return Err(Error::Divergence { waves });
            }
            waves += 1;

            let more_work = pool.wave(0..n, |u| {
                if !distances.is_reached(u) || settled[u].swap(true, Ordering::AcqRel) {
                    return false;
                }

                let dist_u = distances.get(u);
                let mut improved = false;
                for edge in graph.outgoing_edges(u) {
                    let candidate = dist_u.saturating_add(edge.weight);
                    if distances.relax(edge.to, candidate) {
                        settled[edge.to].store(false, Ordering::Release);
                        improved = true;
                    }
                }
                improved
            });

            trace!("wave {}: more work = {}", waves, more_work);
            if !more_work {
                break;
            }
        }

        debug!("iterative relaxation done after {} waves", waves);

        Ok(DistanceVector::new(source, distances.into_distances()))
    }
}
