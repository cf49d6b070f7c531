/*!
# Canonical Labelling

Computes a relabelling of a graph that is identical for all isomorphic graphs.
The canonical form is used as a memoization key for inertia sets.

The search itself is done by the [`canonical_form`] crate: a graph is converted into a
[`CanonicalGraph`] (sorted adjacency lists), which implements [`Canonize`]. Its running time is
exponential in the worst case, which is fine for the small graphs the solver decomposes into.

# Example
```
use graph_inertia::{prelude::*, repr::canonical::Canonical};

let g1 = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
let g2 = AdjArray::from_edges(3, [(0, 2), (2, 1)]);

assert_eq!(g1.canonical_key(), g2.canonical_key());
```
*/

use std::fmt;

use canonical_form::Canonize;
use itertools::Itertools;

use super::{digest::GraphDigest, *};

/// Isomorphism-invariant key of a graph: the SHA-256 digest of its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphKey(String);

impl GraphKey {
    /// Returns the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first 12 hex digits; handy for log output
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for GraphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical labellings of undirected graphs
pub trait Canonical: AdjacencyList {
    /// Returns `label` such that node `u` becomes node `label[u]` in the canonical form.
    fn canonical_labelling(&self) -> Vec<Node>;

    /// Returns the sorted, normalized edge list of the canonical form
    fn canonical_edges(&self) -> Vec<Edge> {
        let label = self.canonical_labelling();
        relabelled_edges(self, &label)
    }

    /// Returns the canonical form as a graph of type `GO`
    fn canonical_form_as<GO>(&self) -> GO
    where
        GO: GraphFromScratch,
    {
        GO::from_edges(self.number_of_nodes(), self.canonical_edges())
    }

    /// Returns the canonical form as a graph of the same type
    fn canonical_form(&self) -> Self
    where
        Self: GraphFromScratch,
    {
        self.canonical_form_as()
    }

    /// Returns a key that is identical for two graphs exactly if they are isomorphic
    fn canonical_key(&self) -> GraphKey {
        GraphKey(self.canonical_form_as::<AdjArray>().digest_sha256())
    }
}

impl<G> Canonical for G
where
    G: AdjacencyList,
{
    fn canonical_labelling(&self) -> Vec<Node> {
        if self.is_empty() {
            return Vec::new();
        }

        CanonicalGraph::new(self)
            .morphism_to_canonical()
            .into_iter()
            .map(|u| u as Node)
            .collect()
    }
}

fn relabelled_edges<G: AdjacencyList>(graph: &G, label: &[Node]) -> Vec<Edge> {
    graph
        .edges(true)
        .map(|e| e.relabelled(label))
        .sorted_unstable()
        .collect()
}

/// Sorted adjacency lists of a graph; the representation handed to [`Canonize`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalGraph {
    adj: Vec<Vec<usize>>,
}

impl CanonicalGraph {
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            adj: graph
                .vertices()
                .map(|u| {
                    graph
                        .neighbors_of(u)
                        .map(|v| v as usize)
                        .sorted_unstable()
                        .collect()
                })
                .collect(),
        }
    }
}

impl Canonize for CanonicalGraph {
    fn size(&self) -> usize {
        self.adj.len()
    }

    fn apply_morphism(&self, perm: &[usize]) -> Self {
        let mut adj = vec![Vec::new(); self.size()];
        for (u, nbs) in self.adj.iter().enumerate() {
            adj[perm[u]] = nbs.iter().map(|&v| perm[v]).sorted_unstable().collect();
        }
        Self { adj }
    }

    fn invariant_neighborhood(&self, u: usize) -> Vec<Vec<usize>> {
        vec![self.adj[u].clone()]
    }
}
