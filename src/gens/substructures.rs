/*!
# Substructure Generators

Utility methods to add common motifs to an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**
- **Stars**

# Example

```rust
use graph_inertia::{prelude::*, gens::*};

let mut g = AdjArray::new(6);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_star(5, [0, 4]);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use graph_inertia::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArray::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: a path whose last node is connected back to
    /// the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**.
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);

    /// Connects `center` to every node in `leaves`.
    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        for (i, &u) in nodes.iter().enumerate() {
            if with_loops {
                self.try_add_edge(u, u);
            }

            for &v in &nodes[i + 1..] {
                self.try_add_edge(u, v);
            }
        }
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>,
    {
        for v in leaves {
            self.add_edge(center, v);
        }
    }
}
