//! Graph access trait for the dependency graphs the traversal engine walks.
//!
//! The traversal code only needs adjacency and label lookups, so it is
//! written against `GraphAccess` rather than a concrete graph type.

/// Read access to a labelled directed graph.
///
/// # Edge Format
/// Edges are returned as `(node, label_id)` pairs where:
/// - `node` is the index of the connected node
/// - `label_id` is an opaque identifier that can be resolved via `get_label()`
pub trait GraphAccess {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over incoming edges for the given node.
    ///
    /// Each edge is a `(source_node, label_id)` pair.
    /// Returns `None` if the node index is out of bounds.
    fn incoming(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>>;

    /// Returns an iterator over outgoing edges for the given node.
    ///
    /// Each edge is a `(target_node, label_id)` pair.
    /// Returns `None` if the node index is out of bounds.
    fn outgoing(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>>;

    /// Returns the label string for the given label ID.
    fn get_label(&self, label_id: usize) -> Option<&str>;

    /// Returns the label ID for the given label string.
    fn get_label_id(&self, label: &str) -> Option<usize>;
}
