/*!
# Inertia Solver

Computes the inertia set of an arbitrary graph:

1. The inertia set of a disjoint union is the Minkowski sum of the parts, so every connected
   component is handled on its own.
2. Components of known shape (see [`recognize`]) are looked up directly.
3. Any other component `c` is split at a cut vertex `v`. Either `v` contributes one positive
   and one negative eigenvalue on its own, giving `I(c - v) + {(1, 1)}`, or it is shared by the
   pieces of `c - v`, giving the sum of `I(piece + v)` over all pieces. `I(c)` is the union of
   both alternatives.

A component of unknown shape without cut vertices is a hard error; the solver never returns a
partial result. Results are memoized by canonical key, so isomorphic subgraphs are solved once.

```
use graph_inertia::{prelude::*, gens::*, inertia::*};

let mut graph = AdjArray::new(4);
graph.connect_path(0..4);

let set = InertiaSolver::new().solve(&graph).unwrap();
assert_eq!(set, InertiaSet::new([(0, 3), (1, 2)], Some(4)));
```
*/

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::*;

/// Recursive, memoized inertia set computation.
///
/// Configured builder-style: the cache may be shared between solvers and the cut-vertex
/// strategy can be replaced.
#[derive(Debug, Clone)]
pub struct InertiaSolver<S = SmallestCutVertex> {
    cache: Arc<InertiaCache>,
    selector: S,
}

impl Default for InertiaSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InertiaSolver {
    /// Creates a solver with a fresh cache that splits at the smallest cut vertex
    pub fn new() -> Self {
        Self {
            cache: Arc::new(InertiaCache::new()),
            selector: SmallestCutVertex,
        }
    }
}

impl<S: CutVertexSelector> InertiaSolver<S> {
    /// Uses `cache` instead of the solver's own cache
    pub fn with_cache(mut self, cache: Arc<InertiaCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Replaces the cut-vertex strategy
    pub fn with_selector<T: CutVertexSelector>(self, selector: T) -> InertiaSolver<T> {
        InertiaSolver {
            cache: self.cache,
            selector,
        }
    }

    pub fn cache(&self) -> &Arc<InertiaCache> {
        &self.cache
    }

    /// Computes the inertia set of `graph`; its size is the order of `graph`.
    ///
    /// # Errors
    /// Returns [`InertiaError::DecompositionExhausted`] if some component of unknown shape has
    /// no cut vertex. Nothing is cached for a failed computation.
    #[instrument(level = "debug", skip_all, fields(order = graph.order(), size = graph.size()))]
    pub fn solve<G: InertiaGraph>(&mut self, graph: &G) -> Result<InertiaSet, InertiaError> {
        let key = graph.canonical_key();
        if let Some(set) = self.cache.get(&key) {
            trace!(key = key.short(), "cache hit");
            return Ok(set);
        }

        let mut inertia = InertiaSet::zero(Some(graph.order()));
        if graph.order() == 0 {
            return Ok(inertia);
        }

        for component in graph.connected_components() {
            let component = graph.subgraph(&component);
            inertia += self.solve_connected(&component)?;
        }

        debug!(key = key.short(), %inertia, "solved");
        self.cache.insert(key, inertia.clone());
        Ok(inertia)
    }

    fn solve_connected<G: InertiaGraph>(&mut self, graph: &G) -> Result<InertiaSet, InertiaError> {
        if let Recognition::Known(set) = self.cache.recognize(graph, &graph.canonical_key()) {
            return Ok(set);
        }

        let candidates = graph.cut_vertices();
        let Some(cut_vertex) = self.selector.select(&candidates) else {
            debug!(graph6 = graph.graph6(), "no cut vertex left");
            return Err(InertiaError::DecompositionExhausted {
                graph6: graph.graph6(),
            });
        };
        debug_assert!(
            candidates.contains(&cut_vertex),
            "selector returned {cut_vertex}, which is not a cut vertex"
        );
        trace!(cut_vertex, candidates = candidates.len(), "split");

        let remainder = graph.delete_vertex(cut_vertex);
        let removed = self.solve(&remainder)? + InertiaSet::one_one();

        let mut reattached = InertiaSet::zero(None);
        for piece in remainder.connected_components() {
            // nodes of `remainder` above the cut vertex were shifted down by one
            let mut nodes = piece
                .into_iter()
                .map(|u| if u < cut_vertex { u } else { u + 1 })
                .collect::<Vec<_>>();
            nodes.push(cut_vertex);

            reattached += self.solve(&graph.subgraph(&nodes))?;
        }

        Ok(removed | reattached)
    }
}

/// Shorthand for solving a single graph with a fresh [`InertiaSolver`]
pub trait InertiaSetOf {
    fn inertia_set(&self) -> Result<InertiaSet, InertiaError>;
}

impl<G: InertiaGraph> InertiaSetOf for G {
    fn inertia_set(&self) -> Result<InertiaSet, InertiaError> {
        InertiaSolver::new().solve(self)
    }
}
