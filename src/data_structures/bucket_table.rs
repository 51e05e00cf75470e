use parking_lot::Mutex;

use crate::data_structures::DistanceTable;
use crate::Distance;

#[derive(Debug)]
struct Slots {
    buckets: Vec<Vec<usize>>,
    /// Entries across all buckets not yet taken
    pending: usize,
}

/// Dial bucket queue indexed by tentative distance `0..=max_distance`
///
/// A single lock covers every bucket. [`relax_into`](BucketTable::relax_into)
/// runs the distance commit and the bucket insert inside it, so concurrent
/// relaxations of one vertex cannot leave the table and the buckets
/// disagreeing.
#[derive(Debug)]
pub struct BucketTable {
    slots: Mutex<Slots>,
    max_distance: Distance,
}

impl BucketTable {
    /// Allocates `max_distance + 1` empty buckets
    ///
    /// The caller is responsible for bounding `max_distance` beforehand.
    pub fn new(max_distance: usize) -> Self {
        BucketTable {
            slots: Mutex::new(Slots {
                buckets: vec![Vec::new(); max_distance + 1],
                pending: 0,
            }),
            max_distance: max_distance as Distance,
        }
    }

    /// Places `vertex` into bucket `distance` without touching distances
    pub fn insert(&self, vertex: usize, distance: usize) {
        let mut slots = self.slots.lock();
        slots.buckets[distance].push(vertex);
        slots.pending += 1;
    }

    /// Relaxes `vertex` to `candidate` and, on improvement, files it under
    /// bucket `candidate` as one step
    ///
    /// Candidates beyond `max_distance` still update the table but are not
    /// bucketed. Returns true iff the distance improved.
    pub fn relax_into(&self, distances: &DistanceTable, vertex: usize, candidate: Distance) -> bool {
        // Unlocked pre-check, the locked relax below decides.
        if candidate >= distances.get(vertex) {
            return false;
        }

        let mut slots = self.slots.lock();
        if !distances.relax(vertex, candidate) {
            return false;
        }
        if candidate <= self.max_distance {
            slots.buckets[candidate as usize].push(vertex);
            slots.pending += 1;
        }
        true
    }

    /// Swaps bucket `distance` out, leaving it empty
    pub fn take(&self, distance: usize) -> Vec<usize> {
        let mut slots = self.slots.lock();
        let snapshot = std::mem::take(&mut slots.buckets[distance]);
        slots.pending -= snapshot.len();
        snapshot
    }

    /// True once every inserted entry has been taken
    pub fn is_drained(&self) -> bool {
        self.slots.lock().pending == 0
    }
}

/// Heap bytes taken by the empty bucket headers for `max_distance`
pub fn table_bytes(max_distance: u128) -> u128 {
    max_distance
        .saturating_add(1)
        .saturating_mul(std::mem::size_of::<Vec<usize>>() as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn relax_into_files_improvements_only() {
        let distances = DistanceTable::new(3, 0);
        let buckets = BucketTable::new(10);
        buckets.insert(0, 0);

        assert!(buckets.relax_into(&distances, 1, 4));
        assert!(!buckets.relax_into(&distances, 1, 6));
        assert!(buckets.relax_into(&distances, 2, 11));
        assert_eq!(distances.get(2), 11);

        assert_eq!(buckets.take(0), vec![0]);
        assert_eq!(buckets.take(4), vec![1]);
        assert!(buckets.take(4).is_empty());
        assert!(buckets.is_drained());
    }

    #[test]
    fn concurrent_relax_into_buckets_each_commit_once() {
        let threads = 8u64;
        let per_thread = 500u64;
        let distances = DistanceTable::new(2, 0);
        let buckets = BucketTable::new(5_000);

        let mut committed: Vec<u64> = thread::scope(|s| {
            let workers: Vec<_> = (0..threads)
                .map(|t| {
                    let (distances, buckets) = (&distances, &buckets);
                    s.spawn(move || {
                        (0..per_thread)
                            .map(|i| 1 + (per_thread - i) * threads + t)
                            .filter(|&d| buckets.relax_into(distances, 1, d))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            workers.into_iter().flat_map(|w| w.join().unwrap()).collect()
        });
        committed.sort_unstable();

        let mut filed = Vec::new();
        for d in 0..=5_000 {
            for v in buckets.take(d) {
                assert_eq!(v, 1);
                filed.push(d as u64);
            }
        }

        assert_eq!(filed, committed);
        assert_eq!(filed.first().copied(), Some(distances.get(1)));
        assert_eq!(distances.get(1), 1 + threads);
        assert!(buckets.is_drained());
    }
}
