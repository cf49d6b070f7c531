use std::fmt;

use itertools::Itertools;

use super::*;

/// An undirected graph stored as one neighbor-array per node.
///
/// Neighborhoods are unsorted; membership tests are linear in the degree, which is
/// more than fast enough for the graph sizes encountered in inertia computations.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphNew for AdjArray {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            return true;
        }

        self.nbs[u as usize].push(v);
        if u != v {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
        false
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let Some(pos) = self.nbs[u as usize].iter().position(|&w| w == v) else {
            return false;
        };
        self.nbs[u as usize].swap_remove(pos);

        if u != v {
            let pos = self.nbs[v as usize]
                .iter()
                .position(|&w| w == u)
                .expect("neighborhoods of an undirected graph are symmetric");
            self.nbs[v as usize].swap_remove(pos);
        }

        self.num_edges -= 1;
        true
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdjArray(n={}, edges=[{}])",
            self.number_of_nodes(),
            self.ordered_edges(true).join(", ")
        )
    }
}

#[cfg(test)]
crate::testing::test_graph_ops!(
    test_adj_array_ops,
    AdjArray,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
