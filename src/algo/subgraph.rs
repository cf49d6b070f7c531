/*!
# Subgraph Algorithms

Provides traits and implementations for extracting subgraphs from graphs:
vertex-induced subgraphs and the graph obtained by deleting a single vertex.
*/

use fxhash::FxHashMap;

use super::*;

/// A trait for creating subgraphs from a graph.
pub trait Subgraph: Sized {
    /// Creates a **vertex-induced subgraph** of type `GO` on the nodes in `vertices`.
    ///
    /// Node `vertices[i]` becomes node `i` of the subgraph. Duplicates in `vertices` are ignored
    /// after their first occurrence.
    ///
    /// # Returns
    /// A tuple `(graph, mapping)` with the induced subgraph and a map from old to new node IDs.
    fn vertex_induced_as<GO>(&self, vertices: &[Node]) -> (GO, FxHashMap<Node, Node>)
    where
        GO: GraphFromScratch;

    /// Creates a vertex-induced subgraph of the same type as `Self`.
    fn vertex_induced(&self, vertices: &[Node]) -> (Self, FxHashMap<Node, Node>)
    where
        Self: GraphFromScratch,
    {
        self.vertex_induced_as(vertices)
    }

    /// Returns the graph with node `v` (and all its edges) deleted.
    ///
    /// Remaining nodes keep their relative order: node `u > v` becomes `u - 1`.
    fn without_vertex(&self, v: Node) -> Self
    where
        Self: GraphFromScratch;
}

impl<G> Subgraph for G
where
    G: AdjacencyList,
{
    fn vertex_induced_as<GO>(&self, vertices: &[Node]) -> (GO, FxHashMap<Node, Node>)
    where
        GO: GraphFromScratch,
    {
        let mut mapping = FxHashMap::default();
        for &old in vertices {
            let next = mapping.len() as Node;
            mapping.entry(old).or_insert(next);
        }

        // Prevent moving mapping into the closure
        let mapping_ref = &mapping;
        let graph = GO::from_edges(
            mapping.len() as NumNodes,
            mapping.iter().flat_map(|(&u, &new_u)| {
                self.neighbors_of(u).filter_map(move |v| {
                    let &new_v = mapping_ref.get(&v)?;
                    let e = Edge(new_u, new_v);
                    e.is_normalized().then_some(e)
                })
            }),
        );

        (graph, mapping)
    }

    fn without_vertex(&self, v: Node) -> Self
    where
        Self: GraphFromScratch,
    {
        assert!(v < self.number_of_nodes());
        let shift = |u: Node| if u > v { u - 1 } else { u };

        Self::from_edges(
            self.number_of_nodes() - 1,
            self.edges(true)
                .filter(|&Edge(a, b)| a != v && b != v)
                .map(|Edge(a, b)| Edge(shift(a), shift(b))),
        )
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn vertex_induced() {
        let graph = AdjArray::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (1, 4)]);

        let (sub, mapping) = graph.vertex_induced(&[4, 1, 2]);
        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(mapping[&4], 0);
        assert_eq!(mapping[&1], 1);
        assert_eq!(mapping[&2], 2);
        assert_eq!(
            sub.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2)]
        );
    }

    #[test]
    fn vertex_induced_ignores_duplicates() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        let (sub, mapping) = graph.vertex_induced(&[2, 1, 2]);
        assert_eq!(sub.number_of_nodes(), 2);
        assert_eq!(mapping.len(), 2);
        assert_eq!(sub.number_of_edges(), 1);
    }

    #[test]
    fn without_vertex() {
        let graph = AdjArray::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (1, 3)]);

        let h = graph.without_vertex(2);
        assert_eq!(h.number_of_nodes(), 4);
        assert_eq!(
            h.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );

        // removing the last node keeps all other labels
        let h = graph.without_vertex(4);
        assert_eq!(
            h.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(1, 3), Edge(2, 3)]
        );
        assert_eq!(AdjArray::new(1).without_vertex(0).number_of_nodes(), 0);
    }
}
