use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Each component is reported with its nodes in BFS order.
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Returns the connected components of the graph after ignoring a list of nodes.
    fn connected_components_exclude_nodes<I>(&self, ignore: I) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>;

    /// Returns *true* if the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    fn connected_components_exclude_nodes<I>(&self, ignore: I) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        ConnectedComponents::new(self).exclude_nodes(ignore)
    }
}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::idle(graph),
        }
    }

    pub fn set_exclude_nodes<I>(&mut self, exclude: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.bfs.exclude_nodes(exclude);
    }

    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_unstable();
    components
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connected_components() {
        let graph = AdjArray::from_edges(7, [(1, 2), (2, 3), (4, 5)]);

        let ccs = sort_components(graph.connected_components().collect_vec());
        assert_eq!(ccs, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert!(!graph.is_connected());

        let ccs = sort_components(graph.connected_components_exclude_nodes([2, 6]).collect_vec());
        assert_eq!(ccs, vec![vec![0], vec![1], vec![3], vec![4, 5]]);
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(AdjArray::new(0).connected_components().count(), 0);
        assert!(AdjArray::new(0).is_connected());
        assert!(AdjArray::new(1).is_connected());
        assert!(AdjArray::from_edges(2, [(0, 1)]).is_connected());
    }
}
