/*!
# Biconnectivity

Articulation points (cut vertices) and biconnected blocks of undirected graphs,
computed with the Hopcroft–Tarjan lowpoint algorithm.

The search is driven by an explicit call stack, so long paths do not exhaust the thread's stack.
Every node belongs to at least one block; isolated nodes form a block on their own and
bridges form blocks of two nodes.
*/

use itertools::Itertools;

use super::*;

pub trait Biconnectivity: AdjacencyList + Sized {
    /// Returns the articulation points of the graph in increasing order
    fn articulation_points(&self) -> Vec<Node> {
        self.blocks_and_cut_vertices().1
    }

    /// Returns the biconnected blocks; nodes within a block are sorted increasingly and
    /// blocks are sorted lexicographically
    fn biconnected_components(&self) -> Vec<Vec<Node>> {
        self.blocks_and_cut_vertices().0
    }

    /// Returns the biconnected blocks and the articulation points of the graph
    fn blocks_and_cut_vertices(&self) -> (Vec<Vec<Node>>, Vec<Node>);
}

impl<G> Biconnectivity for G
where
    G: AdjacencyList,
{
    fn blocks_and_cut_vertices(&self) -> (Vec<Vec<Node>>, Vec<Node>) {
        ArticulationPointSearch::new(self).compute()
    }
}

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    parent: Option<Node>,
    next_neighbor: usize,
}

pub struct ArticulationPointSearch<'a, T>
where
    T: AdjacencyList,
{
    graph: &'a T,
    nbs: Vec<Vec<Node>>,
    low_point: Vec<Node>,
    dfs_num: Vec<Node>,
    visited: NodeMarker,
    articulation_points: NodeMarker,
    current_dfs_num: Node,
    edge_stack: Vec<Edge>,
    blocks: Vec<Vec<Node>>,
}

impl<'a, T> ArticulationPointSearch<'a, T>
where
    T: AdjacencyList,
{
    pub fn new(graph: &'a T) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            nbs: graph
                .vertices()
                .map(|u| graph.neighbors_of(u).sorted_unstable().collect())
                .collect(),
            low_point: vec![0; n as usize],
            dfs_num: vec![0; n as usize],
            visited: NodeMarker::new(n),
            articulation_points: NodeMarker::new(n),
            current_dfs_num: 0,
            edge_stack: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Runs the search on every connected component and returns `(blocks, articulation points)`
    pub fn compute(mut self) -> (Vec<Vec<Node>>, Vec<Node>) {
        for root in self.graph.vertices() {
            if !self.visited.is_marked(root) {
                self.search_from(root);
            }
        }

        let blocks = sort_components(self.blocks);
        let cut_vertices = self
            .graph
            .vertices()
            .filter(|&u| self.articulation_points.is_marked(u))
            .collect();
        (blocks, cut_vertices)
    }

    fn visit(&mut self, u: Node) {
        self.visited.mark(u);
        self.current_dfs_num += 1;
        self.dfs_num[u as usize] = self.current_dfs_num;
        self.low_point[u as usize] = self.current_dfs_num;
    }

    fn search_from(&mut self, root: Node) {
        self.visit(root);
        if self.nbs[root as usize].iter().all(|&v| v == root) {
            self.blocks.push(vec![root]);
            return;
        }

        let mut tree_neighbors_of_root = 0;
        let mut call_stack = vec![StackFrame {
            node: root,
            parent: None,
            next_neighbor: 0,
        }];

        while let Some(frame) = call_stack.last_mut() {
            let u = frame.node;

            if let Some(&v) = self.nbs[u as usize].get(frame.next_neighbor) {
                frame.next_neighbor += 1;

                if !self.visited.is_marked(v) {
                    // tree edge
                    self.edge_stack.push(Edge(u, v));
                    self.visit(v);
                    call_stack.push(StackFrame {
                        node: v,
                        parent: Some(u),
                        next_neighbor: 0,
                    });
                } else if frame.parent != Some(v)
                    && self.dfs_num[v as usize] < self.dfs_num[u as usize]
                {
                    // back edge to an ancestor
                    self.edge_stack.push(Edge(u, v));
                    self.low_point[u as usize] =
                        self.low_point[u as usize].min(self.dfs_num[v as usize]);
                }
                continue;
            }

            let Some(StackFrame {
                parent: Some(p), ..
            }) = call_stack.pop()
            else {
                continue;
            };

            self.low_point[p as usize] = self.low_point[p as usize].min(self.low_point[u as usize]);

            if self.low_point[u as usize] >= self.dfs_num[p as usize] {
                if p == root {
                    tree_neighbors_of_root += 1;
                } else {
                    self.articulation_points.mark(p);
                }
                self.pop_block(Edge(p, u));
            }
        }

        if tree_neighbors_of_root > 1 {
            self.articulation_points.mark(root);
        }
    }

    /// Pops all edges up to and including the tree edge `until` and records their endpoints as block
    fn pop_block(&mut self, until: Edge) {
        let mut block = Vec::new();
        while let Some(e) = self.edge_stack.pop() {
            block.push(e.0);
            block.push(e.1);
            if e == until {
                break;
            }
        }
        block.sort_unstable();
        block.dedup();
        self.blocks.push(block);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn path() {
        let mut graph = AdjArray::new(5);
        graph.connect_path(0..5);

        let (blocks, cuts) = graph.blocks_and_cut_vertices();
        assert_eq!(cuts, vec![1, 2, 3]);
        assert_eq!(
            blocks,
            vec![vec![0, 1], vec![1, 2], vec![2, 3], vec![3, 4]]
        );
    }

    #[test]
    fn cycle_with_pendant() {
        let mut graph = AdjArray::new(6);
        graph.connect_cycle([0, 1, 2, 3]);
        graph.connect_path([2, 4, 5]);

        let (blocks, cuts) = graph.blocks_and_cut_vertices();
        assert_eq!(cuts, vec![2, 4]);
        assert_eq!(blocks, vec![vec![0, 1, 2, 3], vec![2, 4], vec![4, 5]]);
    }

    #[test]
    fn bowtie_rooted_at_cut() {
        // node 0 is the center of two triangles, the search starts there
        let mut graph = AdjArray::new(5);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([0, 3, 4]);

        let (blocks, cuts) = graph.blocks_and_cut_vertices();
        assert_eq!(cuts, vec![0]);
        assert_eq!(blocks, vec![vec![0, 1, 2], vec![0, 3, 4]]);
    }

    #[test]
    fn biconnected_and_trivial() {
        let mut graph = AdjArray::new(7);
        graph.connect_cycle([0, 1, 2, 3]);
        graph.add_edge(4, 5);

        let (blocks, cuts) = graph.blocks_and_cut_vertices();
        assert!(cuts.is_empty());
        assert_eq!(blocks, vec![vec![0, 1, 2, 3], vec![4, 5], vec![6]]);
        assert!(AdjArray::new(0).articulation_points().is_empty());
    }

    #[test]
    fn star_center() {
        let mut graph = AdjArray::new(5);
        graph.connect_star(3, [0, 1, 2, 4]);
        assert_eq!(graph.articulation_points(), vec![3]);
        assert_eq!(graph.biconnected_components().len(), 4);
    }

    #[test]
    fn long_path() {
        // assert that we can deal with very deep searches
        let n: Node = 50_000;
        let mut graph = AdjArray::new(n);
        graph.connect_path(0..n);
        assert_eq!(graph.articulation_points().len(), n as usize - 2);
    }
}
