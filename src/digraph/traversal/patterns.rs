//! Pattern composition for complex graph traversals.
//!
//! Composite traversals: concatenation and Kleene star.

use std::collections::BTreeSet;

use crate::digraph::graph_trait::GraphAccess;
use super::{GraphTraversal, Traversal, TraversalResult};

impl<'g, G: GraphAccess> GraphTraversal<'g, G> {
    /// Concatenate multiple traversals (sequence).
    pub(crate) fn concatenated_traversal(&self, start_nodes: &[usize], traversals: &[Traversal]) -> TraversalResult {
        let mut current_nodes = start_nodes.to_vec();
        for traversal in traversals {
            match self.execute(traversal, &current_nodes) {
                TraversalResult::Success(nodes) => current_nodes = nodes,
                TraversalResult::FailTraversal => return TraversalResult::FailTraversal,
            }
        }
        TraversalResult::from_nodes(current_nodes)
    }

    /// Kleene star traversal (0 or more occurrences).
    ///
    /// Expands a frontier until no new node is reached, so cyclic graphs
    /// terminate.
    pub(crate) fn kleene_star_traversal(&self, start_nodes: &[usize], traversal: &Traversal) -> TraversalResult {
        let mut reached: BTreeSet<usize> = start_nodes.iter().copied().collect();
        let mut frontier = start_nodes.to_vec();

        while !frontier.is_empty() {
            let next = match self.execute(traversal, &frontier) {
                TraversalResult::Success(nodes) => nodes,
                TraversalResult::FailTraversal => break,
            };
            frontier = next.into_iter().filter(|node| reached.insert(*node)).collect();
        }
        TraversalResult::from_nodes(reached.into_iter().collect())
    }
}
