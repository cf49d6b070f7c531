use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same
/// edge; we normalize edges wherever an order is observable.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Applies a node relabelling to both endpoints and normalizes the result
    pub fn relabelled(&self, label: &[Node]) -> Self {
        Edge(label[self.0 as usize], label[self.1 as usize]).normalized()
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(Edge(3, 1).reverse(), Edge(1, 3));
    }

    #[test]
    fn relabel() {
        let label = [2, 0, 1];
        assert_eq!(Edge(0, 1).relabelled(&label), Edge(0, 2));
        assert_eq!(Edge(1, 2).relabelled(&label), Edge(0, 1));
    }
}
