/*!
# Random Trees

Generates random spanning trees of the complete graph with loop-erased random walks:
starting from an unconnected node, we walk until we hit the tree, forget every loop along
the way, and attach the remaining path to the tree.

# Examples

```
use graph_inertia::gens::*;

let mut rng = rand::rng();
let edges = RandomTree::new().nodes(5).root(0).generate(&mut rng);

assert_eq!(edges.len(), 4);
```
*/

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::*;

/// Generator for a random tree on `n` nodes grown from `root` (default: `0`).
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
    root: Node,
}

impl RandomTree {
    /// Creates a new generator with `n = 0` and `root = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the tree is grown from.
    ///
    /// # Panics
    /// Generation panics if `root >= n` and `n > 0`.
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the node the tree is grown from.
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomTree {
    fn stream<'a, R>(&'a self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a
    where
        R: Rng,
    {
        RandomTreeGenerator::new(self.n, self.root, rng)
    }
}

/// Streaming generator for the edges of a random tree.
///
/// Yields exactly `n - 1` edges (none for `n = 0`).
pub struct RandomTreeGenerator<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    node_gen: Option<Uniform<Node>>,
    connected: NodeMarker,
    on_path: NodeMarker,
    path: Vec<Node>,
    path_skip: usize,
}

impl<'a, R> RandomTreeGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a generator for a tree of `n` nodes grown from `root`.
    ///
    /// # Panics
    /// Panics if `n > 0` and `root >= n`.
    pub fn new(n: NumNodes, root: Node, rng: &'a mut R) -> Self {
        let mut connected = NodeMarker::new(n);
        if n > 0 {
            assert!(root < n);
            connected.mark(root);
        }

        Self {
            rng,
            node_gen: Uniform::new(0 as Node, n).ok(),
            connected,
            on_path: NodeMarker::new(n),
            path: Vec::new(),
            path_skip: usize::MAX - 1,
        }
    }
}

impl<R> Iterator for RandomTreeGenerator<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        // emit the remainder of the last attached path first
        if self.path_skip + 1 < self.path.len() {
            self.path_skip += 1;
            return Some(Edge(
                self.path[self.path_skip],
                self.path[self.path_skip - 1],
            ));
        }

        if self.connected.are_all_marked() {
            return None;
        }

        let node_gen = self.node_gen.as_ref()?;

        self.path_skip = usize::MAX - 1;
        self.on_path.clear_all();
        self.path.clear();

        loop {
            let u = node_gen.sample(self.rng);

            if self.connected.is_marked(u) {
                if self.path.is_empty() {
                    continue;
                }

                // the walk hit the tree: attach the loop-erased path
                self.path.push(u);
                for &w in &self.path {
                    self.connected.mark(w);
                }
                self.path_skip = 1;
                return Some(Edge(self.path[1], self.path[0]));
            }

            if self.on_path.mark(u) {
                // erase the loop closed by `u`
                while let Some(w) = self.path.pop() {
                    if w == u {
                        break;
                    }
                    self.on_path.unmark(w);
                }
            }

            self.path.push(u);
        }
    }
}
