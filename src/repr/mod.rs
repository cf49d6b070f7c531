/*!
# Graph Representations

The inertia solver only ever looks at small, simple, undirected graphs, so a single
adjacency-array representation ([`AdjArray`]) backs everything in this crate.

In addition, this module provides
- [`canonical`]: canonical labellings, so that isomorphic graphs can be recognized, and
- [`digest`]: hash digests of graphs, used (on canonical forms) as memoization keys.
*/

use crate::{ops::*, *};

mod undirected;

pub mod canonical;
pub mod digest;

pub use undirected::*;
