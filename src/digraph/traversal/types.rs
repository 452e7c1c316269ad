//! Types for graph traversal operations.

use crate::compiler::ast::Matcher;

/// Path over labelled dependency edges
#[derive(Debug, Clone)]
pub enum Traversal {
    /// One hop from dependent to head over a matching edge
    Incoming(Matcher),
    /// One hop from head to dependent over a matching edge
    Outgoing(Matcher),
    Concatenated(Vec<Traversal>),
    /// Zero or more repetitions; the start nodes are always reached
    KleeneStar(Box<Traversal>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalResult {
    /// Traversal failed to find matches
    FailTraversal,
    /// Successfully found matching nodes (sorted, deduplicated)
    Success(Vec<usize>),
}

impl TraversalResult {
    /// Build a result from collected nodes, failing when nothing was reached
    pub(crate) fn from_nodes(mut nodes: Vec<usize>) -> Self {
        nodes.sort_unstable();
        nodes.dedup();
        if nodes.is_empty() {
            TraversalResult::FailTraversal
        } else {
            TraversalResult::Success(nodes)
        }
    }

    /// Reached nodes; empty for a failed traversal
    pub fn into_nodes(self) -> Vec<usize> {
        match self {
            TraversalResult::Success(nodes) => nodes,
            TraversalResult::FailTraversal => Vec::new(),
        }
    }
}
