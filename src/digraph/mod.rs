pub mod graph;
pub mod graph_trait;
pub mod traversal;

pub use graph::{DirectedGraph, Vocabulary, EdgePairIterator};
pub use graph_trait::GraphAccess;
pub use traversal::{GraphTraversal, Traversal, TraversalResult};
