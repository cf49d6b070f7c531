/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs.

The digest encodes:
- the number of nodes, and
- the sorted list of normalized edges,

before feeding them into a cryptographic hash function.

Note that the digest depends on the node labels. To obtain a digest that is
identical for isomorphic graphs, hash the canonical form instead
(see [`Canonical::canonical_key`](super::canonical::Canonical::canonical_key)).

## Example
```
use graph_inertia::{prelude::*, repr::digest::GraphDigest};

let mut graph = AdjArray::new(10);
graph.add_edge(4, 3);
graph.add_edge(1, 2);

assert_eq!(graph.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **hash digest** of a graph.
///
/// Digests are designed to be:
/// - **Representation independent**: Works with any [`AdjacencyList`] implementation.
/// - **Deterministic**: Edges are normalized and encoded in sorted order.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 8];

        let encode = |buf: &mut [u8], u: Node| {
            for (i, c) in buf.iter_mut().enumerate().take(4) {
                *c = (u >> (8 * i)) as u8;
            }
        };

        // first encode the number of nodes in the graph
        encode(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(&buffer[0..4]);

        // then append a sorted edge list
        for Edge(u, v) in self.ordered_edges(true) {
            encode(&mut buffer[0..], u);
            encode(&mut buffer[4..], v);
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digest_is_label_sensitive_but_storage_independent() {
        let g1 = AdjArray::from_edges(4, [(0, 1), (1, 2)]);
        let g2 = AdjArray::from_edges(4, [(2, 1), (1, 0)]);
        let g3 = AdjArray::from_edges(4, [(0, 1), (1, 3)]);

        assert_eq!(g1.digest_sha256(), g2.digest_sha256());
        assert_ne!(g1.digest_sha256(), g3.digest_sha256());
        assert_eq!(g1.digest_sha256().len(), 64);
    }

    #[test]
    fn digest_counts_isolated_nodes() {
        let g1 = AdjArray::from_edges(3, [(0, 1)]);
        let g2 = AdjArray::from_edges(4, [(0, 1)]);
        assert_ne!(g1.digest_sha256(), g2.digest_sha256());
    }
}
