use crate::{
    algo::{Biconnectivity, Connectivity, Subgraph, sort_components},
    edge::NumEdges,
    io::Graph6Write,
    node::*,
    ops::{AdjacencyList, GraphEdgeOrder, GraphNodeOrder},
    repr::{
        AdjArray,
        canonical::{Canonical, GraphKey},
    },
};

/// The view of a graph the inertia solver works on.
///
/// Nodes of every graph are `0..order()`. Graphs are treated as immutable values: deleting a
/// vertex or taking a subgraph produces a new graph.
pub trait InertiaGraph: Sized {
    /// Number of vertices
    fn order(&self) -> NumNodes;

    /// Number of edges
    fn size(&self) -> NumEdges;

    /// Degrees of all vertices in descending order
    fn degree_sequence(&self) -> Vec<NumNodes>;

    /// Key that is identical for two graphs exactly if they are isomorphic
    fn canonical_key(&self) -> GraphKey;

    /// graph6 encoding, used to identify graphs in errors and logs
    fn graph6(&self) -> String;

    /// Vertex sets of the connected components; vertices and components are sorted
    fn connected_components(&self) -> Vec<Vec<Node>>;

    /// Biconnected blocks and the sorted cut vertices
    fn blocks_and_cut_vertices(&self) -> (Vec<Vec<Node>>, Vec<Node>);

    /// Cut vertices in increasing order
    fn cut_vertices(&self) -> Vec<Node> {
        self.blocks_and_cut_vertices().1
    }

    /// Graph without `v`; vertex `u > v` becomes `u - 1`
    fn delete_vertex(&self, v: Node) -> Self;

    /// Subgraph induced by `vertices`; vertex `vertices[i]` becomes `i`
    fn subgraph(&self, vertices: &[Node]) -> Self;
}

impl InertiaGraph for AdjArray {
    fn order(&self) -> NumNodes {
        self.number_of_nodes()
    }

    fn size(&self) -> NumEdges {
        self.number_of_edges()
    }

    fn degree_sequence(&self) -> Vec<NumNodes> {
        AdjacencyList::degree_sequence(self)
    }

    fn canonical_key(&self) -> GraphKey {
        Canonical::canonical_key(self)
    }

    fn graph6(&self) -> String {
        self.to_graph6()
    }

    fn connected_components(&self) -> Vec<Vec<Node>> {
        sort_components(Connectivity::connected_components(self).collect())
    }

    fn blocks_and_cut_vertices(&self) -> (Vec<Vec<Node>>, Vec<Node>) {
        Biconnectivity::blocks_and_cut_vertices(self)
    }

    fn cut_vertices(&self) -> Vec<Node> {
        self.articulation_points()
    }

    fn delete_vertex(&self, v: Node) -> Self {
        self.without_vertex(v)
    }

    fn subgraph(&self, vertices: &[Node]) -> Self {
        self.vertex_induced(vertices).0
    }
}
