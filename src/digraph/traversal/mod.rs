//! Graph traversal over dependency graphs.
//!
//! Traversals are described with [`Traversal`] and evaluated from a set of start nodes to the set of nodes they reach.
//!
//! # Module Structure
//!
//! - [`types`] - `Traversal`, `TraversalResult`
//! - [`basic`] - single-hop label traversals
//! - [`patterns`] - concatenation, kleene star
//!
//! # Example
//!
//! ```ignore
//! use hyponym_detector::digraph::{DirectedGraph, GraphTraversal, Traversal};
//! use hyponym_detector::compiler::ast::Matcher;
//!
//! let graph = DirectedGraph::from_edges(&[(0, 1, "conj"), (1, 2, "conj")]);
//! let traversal = GraphTraversal::new(&graph);
//! let reached = traversal
//!     .execute(&Traversal::KleeneStar(Box::new(Traversal::Outgoing(Matcher::string("conj")))), &[0])
//!     .into_nodes();
//! assert_eq!(reached, vec![0, 1, 2]);
//! ```

mod types;
mod basic;
mod patterns;


pub use types::{Traversal, TraversalResult};
pub use basic::GraphTraversal;
