//! Immutable, connected, simple weighted undirected graph.
mod edge;
pub(crate) mod traits;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

pub use edge::EdgeId;
pub(crate) use edge::EdgeData;
pub use traits::{cmp_weight, Weight};
use traits::{is_comparable, Graph};

use crate::error::{Error, Result};

/// Adjacency lists over dense vertex indices. Each undirected edge is stored
/// once per endpoint.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyList {
    edges: Vec<Vec<(usize, EdgeId)>>,
}

impl AdjacencyList {
    pub fn reserved(vertices: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertices],
        }
    }

    pub fn add_edge_undirected(&mut self, from: usize, to: usize, edge: EdgeId) {
        self.edges[from].push((to, edge));
        self.edges[to].push((from, edge));
    }
}

impl Graph for AdjacencyList {
    fn order(&self) -> usize {
        self.edges.len()
    }

    fn adjacency(&self, v: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_ {
        self.edges[v].iter().copied()
    }
}

/// A connected simple graph whose vertices are `V` and edge weights `W`.
///
/// Vertices are interned in `Ord` order and edges are numbered in
/// lexicographic order of their (smaller, larger) endpoints. Nothing changes
/// after construction.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: Vec<EdgeData<W>>,
    lookup: HashMap<(usize, usize), EdgeId>,
    adjacency: AdjacencyList,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Ord + Hash,
    W: Weight,
{
    /// Builds a graph from an edge list. The vertex set is whatever the edges
    /// touch.
    pub fn new(edges: impl IntoIterator<Item = (V, V, W)>) -> Result<Self> {
        Self::with_vertices(std::iter::empty(), edges)
    }

    /// Builds a graph from an explicit vertex set plus an edge list. Vertices
    /// listed here but touched by no edge leave the graph disconnected unless
    /// they are the only vertex.
    pub fn with_vertices(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V, W)>,
    ) -> Result<Self> {
        let edges: Vec<(V, V, W)> = edges.into_iter().collect();

        let mut vertices: Vec<V> = vertices
            .into_iter()
            .chain(edges.iter().flat_map(|(a, b, _)| [a.clone(), b.clone()]))
            .collect();
        vertices.sort();
        vertices.dedup();
        if vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let index: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();

        let mut data = Vec::with_capacity(edges.len());
        for (position, (a, b, weight)) in edges.iter().enumerate() {
            if !is_comparable(weight) {
                return Err(Error::IncomparableWeight { position });
            }
            let (a, b) = (index[a], index[b]);
            if a == b {
                return Err(Error::SelfLoop { position });
            }
            data.push(EdgeData {
                lo: a.min(b),
                hi: a.max(b),
                weight: *weight,
                position,
            });
        }
        // stable, so the later of two duplicates is the one reported
        data.sort_by_key(|e| (e.lo, e.hi));
        if let Some(pair) = data.windows(2).find(|w| (w[0].lo, w[0].hi) == (w[1].lo, w[1].hi)) {
            return Err(Error::DuplicateEdge {
                position: pair[0].position.max(pair[1].position),
            });
        }

        let mut adjacency = AdjacencyList::reserved(vertices.len());
        let mut lookup = HashMap::with_capacity(data.len());
        for (i, e) in data.iter().enumerate() {
            adjacency.add_edge_undirected(e.lo, e.hi, EdgeId(i));
            lookup.insert((e.lo, e.hi), EdgeId(i));
        }

        let (_, components) = adjacency.components(None);
        if components != 1 {
            return Err(Error::Disconnected { components });
        }

        debug!(
            vertices = vertices.len(),
            edges = data.len(),
            "built weighted graph"
        );
        Ok(Self {
            vertices,
            index,
            edges: data,
            lookup,
            adjacency,
        })
    }

    pub fn find_edge(&self, a: &V, b: &V) -> Option<EdgeId> {
        let (a, b) = (*self.index.get(a)?, *self.index.get(b)?);
        self.lookup.get(&(a.min(b), a.max(b))).copied()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Neighbors of `v`; empty when `v` is not a vertex.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        let adjacent = self.index.get(v).map(|&i| self.adjacency.edges[i].as_slice());
        adjacent
            .unwrap_or_default()
            .iter()
            .map(|&(to, _)| &self.vertices[to])
    }

    /// Edges with one endpoint in `a` and the other in `b`, in canonical order.
    pub fn edges_crossing(&self, a: &HashSet<V>, b: &HashSet<V>) -> Vec<EdgeId> {
        let side = |s: &HashSet<V>| {
            let mut member = vec![false; self.vertices.len()];
            for i in s.iter().filter_map(|v| self.index.get(v)) {
                member[*i] = true;
            }
            member
        };
        let (in_a, in_b) = (side(a), side(b));
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| (in_a[e.lo] && in_b[e.hi]) || (in_a[e.hi] && in_b[e.lo]))
            .map(|(i, _)| EdgeId(i))
            .collect()
    }
}

impl<V, W: Copy> WeightedGraph<V, W> {
    /// Vertices in ascending order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in canonical order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// # Panics
    /// If `edge` was not produced by this graph.
    pub fn weight(&self, edge: EdgeId) -> W {
        self.edges[edge.0].weight
    }

    /// Endpoints with the smaller vertex first.
    ///
    /// # Panics
    /// If `edge` was not produced by this graph.
    pub fn endpoints(&self, edge: EdgeId) -> (&V, &V) {
        let e = &self.edges[edge.0];
        (&self.vertices[e.lo], &self.vertices[e.hi])
    }

    /// Position of `edge` in the edge list the graph was built from.
    pub fn insertion_position(&self, edge: EdgeId) -> usize {
        self.edges[edge.0].position
    }

    #[inline]
    pub(crate) fn data(&self, edge: EdgeId) -> &EdgeData<W> {
        &self.edges[edge.0]
    }

    #[inline]
    pub(crate) fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.0 < self.edges.len()
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub(crate) fn vertex(&self, i: usize) -> &V {
        &self.vertices[i]
    }
}
