use std::{cell::Cell, rc::Rc, sync::Arc};

use graph_inertia::{
    gens::*,
    inertia::*,
    io::{Graph6Read, Graph6Write},
    prelude::*,
    repr::canonical::GraphKey,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Delegates to [`AdjArray`] and counts how often the solver asks for cut vertices
#[derive(Debug, Clone)]
struct CountingGraph {
    graph: AdjArray,
    splits: Rc<Cell<usize>>,
}

impl CountingGraph {
    fn new(graph: AdjArray) -> Self {
        Self {
            graph,
            splits: Rc::new(Cell::new(0)),
        }
    }

    fn wrap(&self, graph: AdjArray) -> Self {
        Self {
            graph,
            splits: Rc::clone(&self.splits),
        }
    }
}

impl InertiaGraph for CountingGraph {
    fn order(&self) -> NumNodes {
        self.graph.order()
    }

    fn size(&self) -> NumEdges {
        self.graph.size()
    }

    fn degree_sequence(&self) -> Vec<NumNodes> {
        InertiaGraph::degree_sequence(&self.graph)
    }

    fn canonical_key(&self) -> GraphKey {
        InertiaGraph::canonical_key(&self.graph)
    }

    fn graph6(&self) -> String {
        self.graph.graph6()
    }

    fn connected_components(&self) -> Vec<Vec<Node>> {
        InertiaGraph::connected_components(&self.graph)
    }

    fn blocks_and_cut_vertices(&self) -> (Vec<Vec<Node>>, Vec<Node>) {
        self.splits.set(self.splits.get() + 1);
        InertiaGraph::blocks_and_cut_vertices(&self.graph)
    }

    fn delete_vertex(&self, v: Node) -> Self {
        self.wrap(self.graph.delete_vertex(v))
    }

    fn subgraph(&self, vertices: &[Node]) -> Self {
        self.wrap(self.graph.subgraph(vertices))
    }
}

fn path(n: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(n);
    graph.connect_path(0..n);
    graph
}

fn spider() -> AdjArray {
    AdjArray::from_edges(7, [(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)])
}

#[test]
fn graph6_input() {
    let p4 = AdjArray::try_read_graph6("Ch").unwrap();
    assert_eq!(
        p4.inertia_set(),
        Ok(InertiaSet::new([(0, 3), (1, 2)], Some(4)))
    );

    let spider = spider();
    let decoded = AdjArray::try_read_graph6(&spider.to_graph6()).unwrap();
    assert_eq!(decoded.inertia_set(), spider.inertia_set());
}

#[test]
fn isomorphic_graphs_are_solved_once() {
    let cache = Arc::new(InertiaCache::new());

    let first = CountingGraph::new(spider());
    let set = InertiaSolver::new()
        .with_cache(Arc::clone(&cache))
        .solve(&first)
        .unwrap();
    assert!(first.splits.get() > 0);

    // legs attached at vertex 6 instead of 0
    let relabelled = CountingGraph::new(AdjArray::from_edges(
        7,
        [(6, 1), (1, 2), (6, 3), (3, 4), (6, 5), (5, 0)],
    ));
    let hits = cache.hits();
    let again = InertiaSolver::new()
        .with_cache(Arc::clone(&cache))
        .solve(&relabelled)
        .unwrap();

    assert_eq!(again, set);
    assert_eq!(relabelled.splits.get(), 0);
    assert_eq!(cache.hits(), hits + 1);
}

#[test]
fn base_cases_do_not_split() {
    for graph in [AdjArray::new(1), path(2), path(3)] {
        let graph = CountingGraph::new(graph);
        InertiaSolver::new().solve(&graph).unwrap();
        assert_eq!(graph.splits.get(), 0);
    }
}

#[test]
fn random_selector_agrees_on_random_trees() {
    let rng = &mut Pcg64Mcg::seed_from_u64(0x1a2b_3c4d);

    for n in [5, 8, 11, 14] {
        let tree = AdjArray::random_tree(rng, n);
        let expected = InertiaSolver::new().solve(&tree).unwrap();

        for seed in 0..3 {
            let selector = RandomCutVertex::new(Pcg64Mcg::seed_from_u64(seed));
            let mut solver = InertiaSolver::new().with_selector(selector);
            assert_eq!(solver.solve(&tree).unwrap(), expected);
        }
    }
}

#[test]
fn failures_are_not_cached() {
    // triangle with a pendant path
    let graph = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
    let mut solver = InertiaSolver::new();

    let err = solver.solve(&graph).unwrap_err();
    assert!(matches!(err, InertiaError::DecompositionExhausted { .. }));
    assert_eq!(err.graph6(), "Bw");
    assert!(!solver.cache().contains(&InertiaGraph::canonical_key(&graph)));

    // the error does not poison later, solvable requests
    assert_eq!(
        solver.solve(&path(3)).unwrap(),
        InertiaSet::new([(0, 2), (1, 1)], Some(3))
    );
}

#[test]
fn plot_of_solved_graph() {
    let set = path(3).inertia_set().unwrap();
    let plot = InertiaPlot::new(&set, PlotOptions::default());

    assert_eq!(plot.axis_range(), (0, 3));
    assert!(plot.points().iter().all(|&(p, q)| set.contains((p, q)) && p + q <= 3));
    assert!(plot.points().contains(&(1, 1)));
    assert!(!plot.points().contains(&(0, 1)));
}
