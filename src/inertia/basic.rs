/*!
# Base Cases

Connected graphs whose inertia set is known without decomposition:

| shape | generators |
|---|---|
| single vertex | `(0, 0)` |
| single edge | `(0, 1)`, `(1, 0)` |
| star on `n` vertices | `(1, 1)`, `(n - 1, 0)`, `(0, n - 1)` |

Every result carries the order of the graph as size.
*/

use super::*;

/// Outcome of matching a connected graph against the known shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    Known(InertiaSet),
    Unrecognized,
}

impl Recognition {
    /// Returns the inertia set if the shape was recognized
    pub fn known(self) -> Option<InertiaSet> {
        match self {
            Self::Known(set) => Some(set),
            Self::Unrecognized => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Matches a connected graph against the known shapes; does not consult any cache.
pub fn recognize<G: InertiaGraph>(graph: &G) -> Recognition {
    let order = graph.order();
    let size = Some(order);

    if order == 1 {
        return Recognition::Known(InertiaSet::zero(size));
    }

    if order == 2 && graph.size() == 1 {
        return Recognition::Known(InertiaSet::new([(0, 1)], size));
    }

    // a star: one vertex adjacent to all others, which in turn have degree 1
    let degrees = graph.degree_sequence();
    if degrees.len() >= 2 && degrees[0] == order - 1 && degrees[1] == 1 {
        return Recognition::Known(InertiaSet::new([(1, 1), (order - 1, 0)], size));
    }

    Recognition::Unrecognized
}

/// Returns the inertia set of a graph of known shape, looking it up in `cache` first.
///
/// # Errors
/// Returns [`InertiaError::UnrecognizedShape`] if the graph is neither cached nor of a known shape.
pub fn basic_inertia_set<G: InertiaGraph>(
    graph: &G,
    cache: &InertiaCache,
) -> Result<InertiaSet, InertiaError> {
    cache
        .recognize(graph, &graph.canonical_key())
        .known()
        .ok_or_else(|| InertiaError::UnrecognizedShape {
            graph6: graph.graph6(),
        })
}
