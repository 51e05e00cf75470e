use parking_lot::{Condvar, Mutex};

use crate::data_structures::{DistanceTable, LazyHeap};
use crate::Distance;

#[derive(Debug)]
struct FrontierState {
    heap: LazyHeap<usize, Distance>,
    /// Workers currently holding a popped entry
    active: usize,
}

/// Shared min-priority frontier for the persistent worker pool
///
/// The heap and the active-worker count live under one lock, so "heap empty
/// and nobody active" is observed atomically. A worker that finds the heap
/// empty while siblings are still active blocks until either new work
/// arrives or the last active worker finishes.
///
/// Every push and pop serializes on the same lock. This is correct but caps
/// throughput as the worker count grows.
#[derive(Debug)]
pub struct SharedFrontier {
    state: Mutex<FrontierState>,
    changed: Condvar,
}

impl SharedFrontier {
    /// Creates a frontier holding the single entry `(0, source)`
    pub fn seeded(source: usize) -> Self {
        SharedFrontier {
            state: Mutex::new(FrontierState {
                heap: LazyHeap::seeded(source, 0),
                active: 0,
            }),
            changed: Condvar::new(),
        }
    }

    /// Claims the smallest entry still current in `distances`, blocking while
    /// the frontier is empty but other workers may still produce work
    ///
    /// Stale entries are dropped on the way. Returns `None` once the frontier
    /// is durably empty; the worker stays active until the guard is dropped.
    pub fn claim(&self, distances: &DistanceTable) -> Option<(ActiveGuard<'_>, usize, Distance)> {
        let mut state = self.state.lock();
        loop {
            if let Some((vertex, distance)) = state.heap.pop_current(|v| distances.get(v)) {
                state.active += 1;
                return Some((ActiveGuard { frontier: self }, vertex, distance));
            }
            if state.active == 0 {
                self.changed.notify_all();
                return None;
            }
            self.changed.wait(&mut state);
        }
    }

    /// Inserts a candidate pair
    pub fn push(&self, vertex: usize, distance: Distance) {
        self.state.lock().heap.push(vertex, distance);
        self.changed.notify_one();
    }

    fn release(&self) {
        let mut state = self.state.lock();
        state.active -= 1;
        if state.active == 0 && state.heap.is_empty() {
            self.changed.notify_all();
        }
    }

    /// Stale entries dropped by [`claim`](SharedFrontier::claim) so far
    pub fn discarded(&self) -> usize {
        self.state.lock().heap.discarded()
    }
}

/// Marks a worker active until dropped
#[derive(Debug)]
pub struct ActiveGuard<'a> {
    frontier: &'a SharedFrontier,
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.frontier.release();
    }
}
