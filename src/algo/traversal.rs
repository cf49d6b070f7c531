/*!
Breadth-first traversal.

The [`BFS`] iterator visits every node reachable from a start node exactly once. Nodes can be
excluded up front (they are treated as already visited), and a finished search can be restarted
at the next unvisited node, which is how connected components are enumerated.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeMarker,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_marker();
        visited.mark(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Creates a traversal iterator that has not been started yet.
    /// Use [`BFS::try_restart_at_unvisited`] to start it.
    pub fn idle(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_marker(),
            queue: VecDeque::new(),
        }
    }

    /// Returns *true* if `u` was visited (or excluded) already
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.is_marked(u)
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        let next = self.visited.iter_unmarked().next();
        match next {
            None => false,
            Some(x) => {
                self.visited.mark(x);
                self.queue.push_back(x);
                true
            }
        }
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already in the queue. It is therefore
    /// highly recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.mark(u);
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`BFS::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder-variant of [`BFS::exclude_nodes`]
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.mark(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

/// Traversal algorithms exposed directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns *true* if `v` can be reached from `u`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|w| w == v)
    }
}

impl<G: AdjacencyList + Sized> Traversal for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        let graph = AdjArray::from_edges(7, [(0, 1), (2, 1), (1, 3), (3, 4), (5, 6)]);

        let order = graph.bfs(0).collect_vec();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        assert_eq!(order[1], 1);
        assert_eq!(order[4], 4);
        assert!(graph.is_reachable(0, 4));
        assert!(!graph.is_reachable(0, 5));
    }

    #[test]
    fn bfs_exclude_and_restart() {
        let graph = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);

        let mut bfs = graph.bfs(0).with_nodes_excluded([2]);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(3));

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
    }
}
