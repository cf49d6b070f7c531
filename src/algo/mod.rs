/*!
# Graph Algorithms

The graph algorithms needed to decompose a graph into the pieces the inertia solver
understands: traversal, connected components, articulation points and biconnected blocks,
and induced subgraphs.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graph_inertia::algo::*;
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod biconnectivity;
mod connectivity;
mod subgraph;
mod traversal;

use crate::prelude::*;

pub use biconnectivity::*;
pub use connectivity::*;
pub use subgraph::*;
pub use traversal::*;
