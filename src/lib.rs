/*!
`graph_inertia` computes *inertia sets* of simple undirected graphs.

The inertia set of a graph `G` on `n` nodes is the set of all pairs `(p, q)` such that some
real symmetric matrix with the off-diagonal zero pattern of `G` has `p` positive and `q`
negative eigenvalues (closed upwards, see [`inertia::InertiaSet`]). Computing it in general is
hard; for graphs that split at cut vertices into single vertices, edges and stars, it follows
from a small algebra on antichains of points.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; edges are undirected, so
`Edge(u, v)` and `Edge(v, u)` are treated as equivalent.
Graphs are stored as [`AdjArray`](crate::repr::AdjArray).

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`inertia`] contains the inertia set algebra, the recognizer for known shapes and the memoized solver,
- [`algo`] includes the decomposition algorithms (connected components, cut vertices, blocks, induced subgraphs),
- [`gens`] builds graphs from substructures (paths, cycles, cliques, stars) and random trees,
- [`io`] reads and writes graphs in the `graph6` format.

[`repr::canonical`] provides canonical labellings; the solver memoizes results by canonical key.

In most use-cases, `use graph_inertia::{prelude::*, inertia::*};` suffices for your needs.

```
use graph_inertia::{prelude::*, gens::*, inertia::*};

let mut graph = AdjArray::new(5);
graph.connect_path(0..5);

let mut solver = InertiaSolver::new();
let set = solver.solve(&graph).unwrap();

assert_eq!(set, InertiaSet::new([(0, 4), (1, 3), (2, 2)], Some(5)));
assert!(set.contains((3, 1)));
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod inertia;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;

#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `graph_inertia::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
