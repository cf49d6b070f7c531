use crate::{gens::*, prelude::*};

/// Installs a `tracing` subscriber that writes through the test harness; `RUST_LOG` sets the level.
/// Safe to call from every test, only the first call has an effect.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Path `0 - 1 - ... - (n-1)`
pub(crate) fn path(n: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(n);
    graph.connect_path(0..n);
    graph
}

/// Star with center `0` and leaves `1..n`
pub(crate) fn star(n: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(n);
    graph.connect_star(0, 1..n);
    graph
}

/// Cycle `0 - 1 - ... - (n-1) - 0`
pub(crate) fn cycle(n: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(n);
    graph.connect_cycle(0..n);
    graph
}

/// Every undirected graph representation should pass these
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random normalized edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v).normalized()
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Dense boolean adjacency matrix as ground truth
            fn adjacency_matrix(n: NumNodes, edges: &[Edge]) -> Vec<Vec<bool>> {
                let mut matrix = vec![vec![false; n as usize]; n as usize];
                for &Edge(u, v) in edges {
                    matrix[u as usize][v as usize] = true;
                    matrix[v as usize][u as usize] = true;
                }
                matrix
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let adj_matrix = adjacency_matrix(n, &edges);

                        // feed edges in both orientations; duplicates must be ignored
                        let mut graph = <$graph>::new(n);
                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(v, u));
                            assert!(graph.try_add_edge(u, v));
                        }

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges(true).collect_vec());

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| adj_matrix[u as usize][v as usize]).collect_vec();
                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), expected);
                            assert_eq!(graph.degree_of(u), expected.len() as NumNodes);
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize][v as usize]);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let mut adj_matrix = adjacency_matrix(n, &edges);
                        let mut graph = <$graph>::from_edges(n, edges.iter().copied());

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let present = std::mem::replace(&mut adj_matrix[u as usize][v as usize], false);
                            adj_matrix[v as usize][u as usize] = false;

                            assert_eq!(graph.try_remove_edge(u, v), present);
                            if present {
                                m -= 1;
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for Edge(u, v) in graph.ordered_edges(true).collect_vec() {
                            graph.remove_edge(v, u);
                        }
                        assert!(graph.is_edgeless());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
