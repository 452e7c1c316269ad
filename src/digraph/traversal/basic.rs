//! Core graph traversal structure and basic traversal operations.

use crate::compiler::ast::Matcher;
use crate::digraph::graph_trait::GraphAccess;
use super::{Traversal, TraversalResult};

/// Direction of a single-hop traversal
#[derive(Debug, Clone, Copy)]
pub(crate) enum Direction {
    Incoming,
    Outgoing,
}

/// Graph traversal engine for dependency graphs.
pub struct GraphTraversal<'g, G: GraphAccess> {
    pub(crate) graph: &'g G,
}

impl<'g, G: GraphAccess> GraphTraversal<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Execute a traversal pattern from the given start nodes.
    pub fn execute(&self, traversal: &Traversal, start_nodes: &[usize]) -> TraversalResult {
        match traversal {
            Traversal::Outgoing(matcher) => self.step(start_nodes, Direction::Outgoing, matcher),
            Traversal::Incoming(matcher) => self.step(start_nodes, Direction::Incoming, matcher),
            Traversal::Concatenated(traversals) => self.concatenated_traversal(start_nodes, traversals),
            Traversal::KleeneStar(traversal) => self.kleene_star_traversal(start_nodes, traversal),
        }
    }

    /// Follow one edge in `direction`, keeping edges whose label satisfies
    /// `matcher`.
    pub(crate) fn step(&self, start_nodes: &[usize], direction: Direction, matcher: &Matcher) -> TraversalResult {
        // Exact labels are resolved to an id once; a label missing from the
        // vocabulary can never match.
        let expected_id = match matcher {
            Matcher::String(label) => match self.graph.get_label_id(label) {
                Some(id) => Some(id),
                None => return TraversalResult::FailTraversal,
            },
            _ => None,
        };

        let mut result_nodes = Vec::new();
        for &start_node in start_nodes {
            let edges: Vec<(usize, usize)> = match direction {
                Direction::Outgoing => self.graph.outgoing(start_node)
                    .map(|edges| edges.collect())
                    .unwrap_or_default(),
                Direction::Incoming => self.graph.incoming(start_node)
                    .map(|edges| edges.collect())
                    .unwrap_or_default(),
            };
            for (node, label_id) in edges {
                let keep = match expected_id {
                    Some(id) => label_id == id,
                    None => self.graph
                        .get_label(label_id)
                        .map(|label| matcher.matches(label))
                        .unwrap_or(false),
                };
                if keep {
                    result_nodes.push(node);
                }
            }
        }
        TraversalResult::from_nodes(result_nodes)
    }
}
