use std::collections::HashMap;

use crate::digraph::graph_trait::GraphAccess;

/// Vocabulary for dependency labels
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    id_to_term: Vec<String>,
    term_to_id: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create ID for a term
    pub fn get_or_create_id(&mut self, term: &str) -> usize {
        if let Some(&id) = self.term_to_id.get(term) {
            id
        } else {
            let id = self.id_to_term.len();
            self.id_to_term.push(term.to_string());
            self.term_to_id.insert(term.to_string(), id);
            id
        }
    }

    pub fn get_id(&self, term: &str) -> Option<usize> {
        self.term_to_id.get(term).copied()
    }

    pub fn get_term(&self, id: usize) -> Option<&str> {
        self.id_to_term.get(id).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.id_to_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_term.is_empty()
    }
}

/// Labelled dependency graph over the tokens of one sentence.
///
/// Edges point from head to dependent. Node ids are sentence-local token
/// indices.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Incoming edges for each node as flattened (source_node, label_id) pairs
    incoming: Vec<Vec<usize>>,
    /// Outgoing edges for each node as flattened (target_node, label_id) pairs
    outgoing: Vec<Vec<usize>>,
    vocabulary: Vocabulary,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `node_count` isolated nodes
    pub fn with_nodes(node_count: usize) -> Self {
        let mut graph = Self::new();
        if node_count > 0 {
            graph.add_node(node_count - 1);
        }
        graph
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node_id: usize) {
        while self.incoming.len() <= node_id {
            self.incoming.push(Vec::new());
        }
        while self.outgoing.len() <= node_id {
            self.outgoing.push(Vec::new());
        }
    }

    /// Add an edge to the graph
    pub fn add_edge(&mut self, from: usize, to: usize, label: &str) {
        self.add_node(from);
        self.add_node(to);

        let label_id = self.vocabulary.get_or_create_id(label);

        // Format: [target_node, label_id, target_node, label_id, ...]
        self.outgoing[from].push(to);
        self.outgoing[from].push(label_id);

        // Format: [source_node, label_id, source_node, label_id, ...]
        self.incoming[to].push(from);
        self.incoming[to].push(label_id);
    }

    pub fn node_count(&self) -> usize {
        self.incoming.len().max(self.outgoing.len())
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len() / 2).sum()
    }

    /// The single `(head, label)` of a node, if it has exactly one
    pub fn head(&self, node: usize) -> Option<(usize, &str)> {
        let edges = self.incoming.get(node)?;
        if edges.len() != 2 {
            return None;
        }
        let label = self.vocabulary.get_term(edges[1])?;
        Some((edges[0], label))
    }

    /// Create graph from edges (convenience method)
    pub fn from_edges(edges: &[(usize, usize, &str)]) -> Self {
        let mut graph = Self::new();
        for &(from, to, label) in edges {
            graph.add_edge(from, to, label);
        }
        graph
    }

    /// Check that the graph is a forest: at most one head per node and no
    /// cycles. Returns a description of the first violation.
    pub fn check_tree(&self) -> Result<(), String> {
        let node_count = self.node_count();
        for node in 0..node_count {
            let heads = self.incoming[node].len() / 2;
            if heads > 1 {
                return Err(format!("token {} has {} heads", node, heads));
            }
        }
        for start in 0..node_count {
            let mut current = start;
            let mut steps = 0;
            while let Some(&parent) = self.incoming[current].first() {
                steps += 1;
                if parent == start || steps > node_count {
                    return Err(format!("dependency cycle through token {}", start));
                }
                current = parent;
            }
        }
        Ok(())
    }
}

/// Iterator over edges stored as flattened (node, label_id) pairs.
pub struct EdgePairIterator<'a> {
    edges: &'a [usize],
    pos: usize,
}

impl<'a> EdgePairIterator<'a> {
    fn new(edges: &'a [usize]) -> Self {
        Self { edges, pos: 0 }
    }
}

impl<'a> Iterator for EdgePairIterator<'a> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos + 1 < self.edges.len() {
            let target = self.edges[self.pos];
            let label_id = self.edges[self.pos + 1];
            self.pos += 2;
            Some((target, label_id))
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.edges.len() - self.pos) / 2;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for EdgePairIterator<'a> {}

impl GraphAccess for DirectedGraph {
    #[inline]
    fn node_count(&self) -> usize {
        DirectedGraph::node_count(self)
    }

    #[inline]
    fn incoming(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>> {
        self.incoming.get(node).map(|edges| EdgePairIterator::new(edges))
    }

    #[inline]
    fn outgoing(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>> {
        self.outgoing.get(node).map(|edges| EdgePairIterator::new(edges))
    }

    #[inline]
    fn get_label(&self, label_id: usize) -> Option<&str> {
        self.vocabulary.get_term(label_id)
    }

    #[inline]
    fn get_label_id(&self, label: &str) -> Option<usize> {
        self.vocabulary.get_id(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary() {
        let mut vocab = Vocabulary::new();

        assert_eq!(vocab.get_or_create_id("nsubj"), 0);
        assert_eq!(vocab.get_or_create_id("dobj"), 1);
        assert_eq!(vocab.get_or_create_id("nsubj"), 0);

        assert_eq!(vocab.get_id("dobj"), Some(1));
        assert_eq!(vocab.get_id("nonexistent"), None);
        assert_eq!(vocab.get_term(0), Some("nsubj"));
        assert_eq!(vocab.get_term(2), None);
    }

    #[test]
    fn test_directed_graph_edges() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(2, 0, "det");
        graph.add_edge(2, 1, "compound");
        graph.add_edge(3, 2, "nsubj");

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let children: Vec<_> = GraphAccess::outgoing(&graph, 2).unwrap().collect();
        assert_eq!(children, vec![(0, 0), (1, 1)]);

        assert_eq!(graph.head(1), Some((2, "compound")));
        assert_eq!(graph.head(3), None);
        assert_eq!(graph.head(2), Some((3, "nsubj")));
        assert_eq!(GraphAccess::incoming(&graph, 3).unwrap().count(), 0);
    }

    #[test]
    fn test_check_tree() {
        let graph = DirectedGraph::from_edges(&[(1, 0, "nsubj"), (1, 2, "dobj")]);
        assert!(graph.check_tree().is_ok());

        let two_heads = DirectedGraph::from_edges(&[(1, 0, "nsubj"), (2, 0, "dobj")]);
        assert!(two_heads.check_tree().unwrap_err().contains("2 heads"));

        let cycle = DirectedGraph::from_edges(&[(0, 1, "dep"), (1, 2, "dep"), (2, 0, "dep")]);
        assert!(cycle.check_tree().unwrap_err().contains("cycle"));
    }

    #[test]
    fn test_with_nodes() {
        assert_eq!(DirectedGraph::with_nodes(5).node_count(), 5);
        assert_eq!(DirectedGraph::with_nodes(0).node_count(), 0);
    }
}
