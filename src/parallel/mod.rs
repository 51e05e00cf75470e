//! Worker pool and wave parallel-for primitives shared by the engines

use std::thread;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::Result;

/// Runs `workers` persistent threads, each executing `worker(id)` to
/// completion, and returns once all of them have exited
///
/// Workers coordinate through whatever shared queue `worker` drains; this
/// function only owns their lifetimes.
pub fn run_persistent<F>(workers: usize, worker: F)
where
    F: Fn(usize) + Sync,
{
    let worker = &worker;
    thread::scope(|s| {
        for id in 0..workers.max(1) {
            s.spawn(move || worker(id));
        }
    });
}

/// Fixed-size rayon pool used for wave parallel-for
///
/// Items of a wave are split adaptively and stolen by idle threads, so a
/// thread that finishes early takes more items.
pub struct WavePool {
    pool: ThreadPool,
}

impl WavePool {
    pub fn new(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("sssp-wave-{}", i))
            .build()?;
        Ok(WavePool { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Applies `f` to every item and blocks until the wave is complete
    ///
    /// Returns the logical OR of the per-item results. Every item is
    /// processed; a `true` does not cut the wave short.
    pub fn wave<I, F>(&self, items: I, f: F) -> bool
    where
        I: IntoParallelIterator<Item = usize> + Send,
        F: Fn(usize) -> bool + Sync + Send,
    {
        self.pool
            .install(|| items.into_par_iter().map(&f).reduce(|| false, |a, b| a | b))
    }
}

impl std::fmt::Debug for WavePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WavePool")
            .field("threads", &self.threads())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn wave_visits_every_item_once() {
        let pool = WavePool::new(4).unwrap();
        let hits: Vec<AtomicUsize> = (0..1000).map(|_| AtomicUsize::new(0)).collect();

        let any = pool.wave(0..hits.len(), |i| {
            hits[i].fetch_add(1, Ordering::Relaxed);
            i == 3
        });

        assert!(any);
        assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
        assert!(!pool.wave(Vec::<usize>::new(), |_| true));
    }

    #[test]
    fn persistent_runs_each_worker() {
        let ran = AtomicUsize::new(0);
        run_persistent(3, |_| {
            ran.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(ran.load(Ordering::Relaxed), 3);
    }
}
