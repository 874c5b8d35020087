//! Spanning trees as immutable values, and the single-edge exchange on them.
mod kruskal;

use std::collections::HashSet;
use std::hash::Hash;

pub use kruskal::minimum_spanning_tree;

use crate::error::{Error, ReplacementFault, Result};
use crate::graph::traits::Graph;
use crate::graph::{AdjacencyList, EdgeId, Weight, WeightedGraph};

/// An edge subset of a graph forming a tree over all of its vertices.
///
/// The edge list is kept sorted in canonical order and the total weight is
/// carried along, so two trees over the same graph compare equal exactly when
/// they hold the same edges.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    edges: Vec<EdgeId>,
    weight: W,
}

impl<W: Weight> SpanningTree<W> {
    /// `edges` must be sorted and form a spanning tree.
    pub(crate) fn from_sorted_unchecked(edges: Vec<EdgeId>, weight: W) -> Self {
        debug_assert!(edges.windows(2).all(|w| w[0] < w[1]));
        Self { edges, weight }
    }

    /// Validates that `edges` is a spanning tree of `graph`.
    pub fn from_edges<V>(
        graph: &WeightedGraph<V, W>,
        edges: impl IntoIterator<Item = EdgeId>,
    ) -> Result<Self> {
        let mut edges: Vec<EdgeId> = edges.into_iter().collect();
        if let Some(&edge) = edges.iter().find(|&&e| !graph.contains_edge(e)) {
            return Err(Error::UnknownEdge { edge });
        }
        edges.sort();
        edges.dedup();
        if edges.len() + 1 != graph.order() {
            return Err(Error::NotASpanningTree);
        }
        let weight = edges
            .iter()
            .fold(W::zero(), |acc, &e| acc + graph.data(e).weight);
        let tree = Self { edges, weight };
        let (_, components) = tree.adjacency(graph).components(None);
        if components != 1 {
            return Err(Error::NotASpanningTree);
        }
        Ok(tree)
    }

    /// Like [`SpanningTree::from_edges`], naming edges by their endpoints.
    pub fn from_pairs<V: Clone + Ord + Hash>(
        graph: &WeightedGraph<V, W>,
        pairs: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self> {
        let edges = pairs
            .into_iter()
            .map(|(a, b)| graph.find_edge(&a, &b).ok_or(Error::NoSuchEdge))
            .collect::<Result<Vec<_>>>()?;
        Self::from_edges(graph, edges)
    }

    /// Edges in canonical order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True only for the tree of a single-vertex graph.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.binary_search(&edge).is_ok()
    }

    pub(crate) fn adjacency<V>(&self, graph: &WeightedGraph<V, W>) -> AdjacencyList {
        let mut adjacency = AdjacencyList::reserved(graph.order());
        for &e in &self.edges {
            let data = graph.data(e);
            adjacency.add_edge_undirected(data.lo, data.hi, e);
        }
        adjacency
    }

    /// Component label of every vertex once `removed` is taken out of the tree.
    fn split<V>(&self, graph: &WeightedGraph<V, W>, removed: EdgeId) -> Vec<usize> {
        let (labels, components) = self.adjacency(graph).components(Some(removed));
        debug_assert_eq!(components, 2);
        labels
    }

    /// The two vertex sets left after deleting `edge`, the first holding its
    /// smaller endpoint. `None` if `edge` is not in the tree.
    pub fn fundamental_cut<V: Clone + Ord + Hash>(
        &self,
        graph: &WeightedGraph<V, W>,
        edge: EdgeId,
    ) -> Option<(HashSet<V>, HashSet<V>)> {
        if !self.contains(edge) {
            return None;
        }
        let labels = self.split(graph, edge);
        let near = labels[graph.data(edge).lo];
        let (mut a, mut b) = (HashSet::new(), HashSet::new());
        for (i, &label) in labels.iter().enumerate() {
            let v = graph.vertex(i).clone();
            if label == near {
                a.insert(v);
            } else {
                b.insert(v);
            }
        }
        Some((a, b))
    }

    /// Exchanges `old` for `new`, returning a new tree and leaving `self` as is.
    ///
    /// `new` must reconnect the two components that removing `old` leaves.
    pub fn swap<V>(&self, graph: &WeightedGraph<V, W>, old: EdgeId, new: EdgeId) -> Result<Self> {
        for edge in [old, new] {
            if !graph.contains_edge(edge) {
                return Err(Error::UnknownEdge { edge });
            }
        }
        let fault = |fault| Error::InvalidReplacement { old, new, fault };
        let Ok(at) = self.edges.binary_search(&old) else {
            return Err(fault(ReplacementFault::OldEdgeNotInTree));
        };
        let Err(insert_at) = self.edges.binary_search(&new) else {
            return Err(fault(ReplacementFault::NewEdgeInTree));
        };

        let labels = self.split(graph, old);
        let data = graph.data(new);
        if labels[data.lo] == labels[data.hi] {
            return Err(fault(ReplacementFault::CutNotCrossed));
        }

        let mut edges = self.edges.clone();
        // `old` sits before the insertion point iff it is smaller than `new`
        if at < insert_at {
            edges.insert(insert_at, new);
            edges.remove(at);
        } else {
            edges.remove(at);
            edges.insert(insert_at, new);
        }
        let weight = self.weight - graph.data(old).weight + data.weight;
        Ok(Self { edges, weight })
    }

    /// `(smaller endpoint, larger endpoint, weight)` of every edge.
    pub fn pairs<V: Clone>(&self, graph: &WeightedGraph<V, W>) -> Vec<(V, V, W)> {
        self.edges
            .iter()
            .map(|&e| {
                let data = graph.data(e);
                (
                    graph.vertex(data.lo).clone(),
                    graph.vertex(data.hi).clone(),
                    data.weight,
                )
            })
            .collect()
    }
}
