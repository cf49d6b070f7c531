/*!
# Node Representation

We choose `Node = u32` as the graphs handled here are tiny compared to `2^32` nodes.
This allows us to directly manipulate node values without abstracting over them.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Dense visited-marker over the nodes `0..n`.
///
/// A plain boolean vector suffices for the graph sizes the inertia solver deals with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeMarker {
    marked: Vec<bool>,
    cardinality: NumNodes,
}

impl NodeMarker {
    /// Creates a marker for `n` nodes with no node marked
    pub fn new(n: NumNodes) -> Self {
        Self {
            marked: vec![false; n as usize],
            cardinality: 0,
        }
    }

    /// Marks `u` and returns *true* if it was marked before
    /// ** Panics if `u >= n` **
    pub fn mark(&mut self, u: Node) -> bool {
        let was = std::mem::replace(&mut self.marked[u as usize], true);
        if !was {
            self.cardinality += 1;
        }
        was
    }

    /// Unmarks `u` and returns *true* if it was marked before
    /// ** Panics if `u >= n` **
    pub fn unmark(&mut self, u: Node) -> bool {
        let was = std::mem::replace(&mut self.marked[u as usize], false);
        if was {
            self.cardinality -= 1;
        }
        was
    }

    /// Returns *true* if `u` is marked
    /// ** Panics if `u >= n` **
    pub fn is_marked(&self, u: Node) -> bool {
        self.marked[u as usize]
    }

    /// Number of marked nodes
    pub fn cardinality(&self) -> NumNodes {
        self.cardinality
    }

    /// Returns *true* if every node is marked
    pub fn are_all_marked(&self) -> bool {
        self.cardinality as usize == self.marked.len()
    }

    /// Unmarks all nodes
    pub fn clear_all(&mut self) {
        self.marked.fill(false);
        self.cardinality = 0;
    }

    /// Iterator over all unmarked nodes in increasing order
    pub fn iter_unmarked(&self) -> impl Iterator<Item = Node> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(u, &m)| (!m).then_some(u as Node))
    }
}
