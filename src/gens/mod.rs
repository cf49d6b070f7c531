/*!
# Graph Generators

Deterministic substructures (paths, cycles, cliques, stars) that can be added to an existing
graph, and a generator for uniformly grown random trees.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomTree::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into a constructor on every graph type implementing
[`GraphFromScratch`].

Trees are the graphs on which every inertia set can be obtained by cut-vertex decomposition,
so random trees are the natural random inputs for cross-checking the solver.
*/

use rand::Rng;

use crate::prelude::*;

mod substructures;
mod tree;

pub use substructures::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<'a, R>(&'a self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random tree with `n` nodes
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, RandomTree::new().nodes(n).stream(rng))
    }
}
