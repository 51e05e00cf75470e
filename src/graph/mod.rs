pub mod traits;
pub mod directed;

pub use traits::{Edge, Graph};
pub use directed::DirectedGraph;
