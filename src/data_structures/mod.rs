pub mod bucket_table;
pub mod distance_table;
pub mod frontier;
pub mod priority_queue;

pub use bucket_table::BucketTable;
pub use distance_table::{DistanceTable, INFINITY};
pub use frontier::{ActiveGuard, SharedFrontier};
pub use priority_queue::LazyHeap;
