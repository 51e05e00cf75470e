use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-heap of `(priority, vertex)` candidates with lazy deletion
///
/// A vertex may be pushed many times as its distance improves. Only the
/// entry matching the vertex's current best is worth expanding, so
/// [`pop_current`](LazyHeap::pop_current) drops every entry whose priority
/// is above the value reported by the caller.
#[derive(Debug)]
pub struct LazyHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Stale entries dropped so far
    discarded: usize,
}

impl<V, P> LazyHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        LazyHeap {
            heap: BinaryHeap::new(),
            discarded: 0,
        }
    }

    /// Creates a heap holding a single candidate
    pub fn seeded(vertex: V, priority: P) -> Self {
        let mut heap = Self::new();
        heap.push(vertex, priority);
        heap
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Pops the smallest entry that is still current
    ///
    /// `current(v)` returns the best known priority of `v`; entries above
    /// it are discarded and counted.
    pub fn pop_current<F>(&mut self, current: F) -> Option<(V, P)>
    where
        F: Fn(V) -> P,
    {
        while let Some(Reverse((priority, vertex))) = self.heap.pop() {
            if priority > current(vertex) {
                self.discarded += 1;
                continue;
            }
            return Some((vertex, priority));
        }
        None
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

impl<V, P> Default for LazyHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
