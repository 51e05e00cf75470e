use log::{debug, trace, warn};

use crate::algorithm::traits::check_source;
use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::config::EngineConfig;
use crate::data_structures::bucket_table::table_bytes;
use crate::data_structures::{BucketTable, DistanceTable};
use crate::graph::Graph;
use crate::parallel::WavePool;
use crate::{Distance, Error, Result};

/// Dial's bucket queue with each bucket relaxed as one parallel wave
///
/// Buckets are indexed by exact tentative distance up to
/// `D_max = max_weight * vertex_count`. A cursor walks them in increasing
/// order; a non-empty bucket is swapped out and its vertices relaxed in
/// parallel, filing every improved neighbour under its new distance. The
/// cursor stays on the same bucket until it comes back empty, since
/// zero-weight edges can refill it.
///
/// Memory and scan time grow with `D_max`, so graphs with large weights are
/// rejected with [`Error::ResourceExhausted`] once the table would exceed
/// [`EngineConfig::max_bucket_bytes`].
#[derive(Debug, Clone, Default)]
pub struct DialBuckets {
    config: EngineConfig,
}

impl DialBuckets {
    pub fn new() -> Self {
        DialBuckets {
            config: EngineConfig::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        DialBuckets { config }
    }

    /// Set the bucket table memory bound in bytes
    pub fn with_max_bucket_bytes(mut self, max_bucket_bytes: usize) -> Self {
        self.config.max_bucket_bytes = max_bucket_bytes;
        self
    }

    /// Upper bound on any shortest path length, checked against the memory
    /// bound for its bucket table
    pub fn max_distance<G: Graph>(&self, graph: &G) -> Result<usize> {
        let max_distance = graph.max_weight() as u128 * graph.vertex_count() as u128;
        let requested = table_bytes(max_distance);
        let limit = self.config.max_bucket_bytes;
        if requested > limit as u128 {
            warn!(
                "bucket table of {} bytes for max distance {} exceeds limit {}",
                requested, max_distance, limit
            );
            return Err(Error::ResourceExhausted { requested, limit });
        }
        Ok(max_distance as usize)
    }
}

impl<G> ShortestPathAlgorithm<G> for DialBuckets
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "DialBuckets"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        check_source(graph, source)?;
        let max_distance = self.max_distance(graph)?;
        let pool = WavePool::new(self.config.worker_count())?;

        debug!(
            "dial buckets: {} threads, {} vertices, {} edges, max distance {}",
            pool.threads(),
            graph.vertex_count(),
            graph.edge_count(),
            max_distance
        );

        let distances = DistanceTable::new(graph.vertex_count(), source);
        let buckets = BucketTable::new(max_distance);
        buckets.insert(source, 0);

        let mut cursor = 0;
        let mut waves = 0usize;
        while cursor <= max_distance {
            let snapshot = buckets.take(cursor);
            if snapshot.is_empty() {
                if buckets.is_drained() {
                    break;
                }
                cursor += 1;
                continue;
            }

            waves += 1;
            trace!("bucket {}: {} vertices", cursor, snapshot.len());
            let bucket_distance = cursor as Distance;

            pool.wave(snapshot, |u| {
                let dist_u = distances.get(u);
                // Filed under a larger distance before a later improvement.
                if dist_u < bucket_distance {
                    return false;
                }

                let mut improved = false;
                for edge in graph.outgoing_edges(u) {
                    let candidate = dist_u.saturating_add(edge.weight);
                    improved |= buckets.relax_into(&distances, edge.to, candidate);
                }
                improved
            });
        }

        debug!(
            "dial buckets done: {} waves, cursor stopped at {}",
            waves, cursor
        );

        Ok(DistanceVector::new(source, distances.into_distances()))
    }
}
