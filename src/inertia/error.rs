use thiserror::Error;

/// Errors raised while computing inertia sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InertiaError {
    /// The graph is none of the shapes whose inertia set is known directly
    #[error("Do not know the inertia set of graph {graph6}")]
    UnrecognizedShape { graph6: String },

    /// A connected graph of unknown shape has no cut vertex to split at
    #[error("Can not decompose unknown graph {graph6} further")]
    DecompositionExhausted { graph6: String },
}

impl InertiaError {
    /// graph6 encoding of the graph that caused the error
    pub fn graph6(&self) -> &str {
        match self {
            Self::UnrecognizedShape { graph6 } | Self::DecompositionExhausted { graph6 } => graph6,
        }
    }
}
