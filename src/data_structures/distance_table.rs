use std::sync::atomic::{AtomicU64, Ordering};

use crate::Distance;

/// Internal encoding of an unreached vertex
pub const INFINITY: Distance = Distance::MAX;

/// Shared table of tentative distances, one atomic word per vertex
///
/// Values only ever decrease: [`relax`](DistanceTable::relax) is an atomic
/// fetch-min, so concurrent relaxations of the same vertex linearize and the
/// smallest candidate wins.
#[derive(Debug)]
pub struct DistanceTable {
    distances: Vec<AtomicU64>,
}

impl DistanceTable {
    /// Creates a table with every vertex at infinity except `source` at zero
    pub fn new(vertex_count: usize, source: usize) -> Self {
        let distances: Vec<AtomicU64> = (0..vertex_count)
            .map(|v| AtomicU64::new(if v == source { 0 } else { INFINITY }))
            .collect();
        DistanceTable { distances }
    }

    /// Reads the current tentative distance of `vertex`
    #[inline]
    pub fn get(&self, vertex: usize) -> Distance {
        self.distances[vertex].load(Ordering::Acquire)
    }

    /// Returns true if `vertex` has been reached
    #[inline]
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.get(vertex) != INFINITY
    }

    /// Lowers the distance of `vertex` to `candidate` if that is an improvement
    ///
    /// Returns true iff this call committed the new value.
    #[inline]
    pub fn relax(&self, vertex: usize, candidate: Distance) -> bool {
        let slot = &self.distances[vertex];
        // Fast path: plain read, the fetch_min below is authoritative.
        if candidate >= slot.load(Ordering::Relaxed) {
            return false;
        }
        slot.fetch_min(candidate, Ordering::AcqRel) > candidate
    }

    /// Consumes the table, mapping unreached vertices to `None`
    pub fn into_distances(self) -> Vec<Option<Distance>> {
        self.distances
            .into_iter()
            .map(|d| match d.into_inner() {
                INFINITY => None,
                d => Some(d),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn relax_only_commits_improvements() {
        let table = DistanceTable::new(3, 0);
        assert_eq!(table.get(0), 0);
        assert!(!table.is_reached(1));

        assert!(table.relax(1, 10));
        assert!(!table.relax(1, 10));
        assert!(!table.relax(1, 11));
        assert!(table.relax(1, 4));
        assert_eq!(table.get(1), 4);

        assert!(!table.relax(0, 0));
        assert_eq!(table.into_distances(), vec![Some(0), Some(4), None]);
    }

    #[test]
    fn concurrent_relax_keeps_minimum_and_never_increases() {
        let table = DistanceTable::new(2, 0);
        let threads = 8;
        let per_thread = 2_000u64;

        let committed: usize = thread::scope(|s| {
            let reader = s.spawn(|| {
                let mut last = INFINITY;
                for _ in 0..10_000 {
                    let now = table.get(1);
                    assert!(now <= last, "distance increased from {} to {}", last, now);
                    last = now;
                }
            });

            let workers: Vec<_> = (0..threads)
                .map(|t| {
                    let table = &table;
                    s.spawn(move || {
                        (0..per_thread)
                            .filter(|i| table.relax(1, 1 + (per_thread - i) * threads + t))
                            .count()
                    })
                })
                .collect();

            reader.join().unwrap();
            workers.into_iter().map(|w| w.join().unwrap()).sum()
        });

        assert!(committed >= 1);
        assert_eq!(table.get(1), 1 + threads);
    }
}
