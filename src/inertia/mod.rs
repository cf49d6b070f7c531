/*!
# Graph Inertia

The *inertia* of a symmetric real matrix is the pair `(p, q)` of its numbers of positive and
negative eigenvalues. The inertia set `I(G)` of a graph `G` collects (the upward closure of)
all inertias of symmetric matrices whose off-diagonal nonzero pattern is the edge set of `G`;
the diagonal is free.

This module computes `I(G)` for graphs that decompose, by repeatedly splitting connected
components at cut vertices, into single vertices, single edges and stars:
- [`InertiaSet`] stores such a set by its minimal points and provides union and Minkowski sum,
- [`recognize`] and [`basic_inertia_set`] handle the shapes known directly,
- [`InertiaSolver`] performs the decomposition, memoized through an [`InertiaCache`],
- [`InertiaPlot`] turns a set into plottable points.

```
use graph_inertia::{prelude::*, inertia::*};

let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
let set = graph.inertia_set().unwrap();

assert_eq!(set.to_string(), "Extended Inertia Set generated by {(0, 3), (1, 1), (3, 0)}");
```
*/

mod basic;
mod cache;
mod error;
mod graph;
mod plot;
mod select;
mod set;
mod solver;

use crate::{node::*, repr::canonical::GraphKey};

pub use basic::*;
pub use cache::*;
pub use error::*;
pub use graph::*;
pub use plot::*;
pub use select::*;
pub use set::*;
pub use solver::*;
