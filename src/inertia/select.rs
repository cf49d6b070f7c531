/*!
# Cut-Vertex Selection

The solver may split a graph at any of its cut vertices; the resulting inertia set does not
depend on the choice. A [`CutVertexSelector`] makes the choice explicit, so results are
reproducible and alternative strategies can be cross-checked against each other.
*/

use rand::{Rng, seq::IndexedRandom};

use super::*;

/// Strategy for choosing the cut vertex to split a graph at
pub trait CutVertexSelector {
    /// Picks one of `candidates` (sorted increasingly); returns `None` only if there are none
    fn select(&mut self, candidates: &[Node]) -> Option<Node>;
}

/// Always picks the smallest cut vertex
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestCutVertex;

impl CutVertexSelector for SmallestCutVertex {
    fn select(&mut self, candidates: &[Node]) -> Option<Node> {
        candidates.first().copied()
    }
}

/// Always picks the largest cut vertex
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestCutVertex;

impl CutVertexSelector for LargestCutVertex {
    fn select(&mut self, candidates: &[Node]) -> Option<Node> {
        candidates.last().copied()
    }
}

/// Picks a cut vertex uniformly at random; seed the generator to get reproducible runs
#[derive(Debug, Clone)]
pub struct RandomCutVertex<R> {
    rng: R,
}

impl<R: Rng> RandomCutVertex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CutVertexSelector for RandomCutVertex<R> {
    fn select(&mut self, candidates: &[Node]) -> Option<Node> {
        candidates.choose(&mut self.rng).copied()
    }
}

impl<F> CutVertexSelector for F
where
    F: FnMut(&[Node]) -> Option<Node>,
{
    fn select(&mut self, candidates: &[Node]) -> Option<Node> {
        self(candidates)
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn deterministic_selectors() {
        assert_eq!(SmallestCutVertex.select(&[2, 5, 7]), Some(2));
        assert_eq!(LargestCutVertex.select(&[2, 5, 7]), Some(7));
        assert_eq!(SmallestCutVertex.select(&[]), None);
        assert_eq!(LargestCutVertex.select(&[]), None);
    }

    #[test]
    fn random_selector_is_seedable() {
        let candidates = [1, 4, 6, 9, 11];
        let picks = |seed| {
            let mut selector = RandomCutVertex::new(Pcg64Mcg::seed_from_u64(seed));
            (0..20)
                .map(|_| selector.select(&candidates).unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(3), picks(3));
        assert!(picks(3).iter().all(|v| candidates.contains(v)));

        let mut selector = RandomCutVertex::new(Pcg64Mcg::seed_from_u64(0));
        assert_eq!(selector.select(&[]), None);
    }

    #[test]
    fn closures_are_selectors() {
        let mut calls = 0;
        let mut second = |candidates: &[Node]| {
            calls += 1;
            candidates.get(1).or(candidates.first()).copied()
        };

        assert_eq!(second.select(&[3, 8]), Some(8));
        assert_eq!(second.select(&[3]), Some(3));
        assert_eq!(calls, 2);
    }
}
