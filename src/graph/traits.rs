use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, Sub},
};

use num_traits::Zero;

use super::EdgeId;

/// Anything usable as an edge weight: totally ordered on the values a graph
/// accepts, and summable.
pub trait Weight: Copy + PartialOrd + Zero + Add<Output = Self> + Sub<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Zero + Add<Output = T> + Sub<Output = T> + Debug {}

/// Total comparison of weights. NaN never reaches here because graph
/// construction rejects it.
#[inline]
pub fn cmp_weight<W: Weight>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[inline]
pub(crate) fn is_comparable<W: Weight>(w: &W) -> bool {
    w.partial_cmp(w).is_some()
}

/// Undirected graph over dense vertex indices `0..order()`.
pub(crate) trait Graph {
    fn order(&self) -> usize;

    fn adjacency(&self, v: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_;

    /// Labels everything reachable from `start`. `f` receives the label of the
    /// current vertex, the current vertex and the edge being followed; returning
    /// `None` refuses to traverse that edge. Already labelled vertices are not
    /// revisited, so `labels` may be shared across several calls.
    fn dfs_label<L>(
        &self,
        start: usize,
        label: L,
        labels: &mut [Option<L>],
        mut f: impl FnMut(&L, usize, EdgeId) -> Option<L>,
    ) {
        let mut stack = vec![start];
        labels[start] = Some(label);
        while let Some(current) = stack.pop() {
            for (to, edge) in self.adjacency(current) {
                if labels[to].is_some() {
                    continue;
                }
                let next = labels[current].as_ref().and_then(|l| f(l, current, edge));
                if let Some(next) = next {
                    labels[to] = Some(next);
                    stack.push(to);
                }
            }
        }
    }

    /// Component id of every vertex and the number of components, ignoring
    /// `skip` if given.
    fn components(&self, skip: Option<EdgeId>) -> (Vec<usize>, usize) {
        let mut labels = vec![None; self.order()];
        let mut count = 0;
        for v in 0..self.order() {
            if labels[v].is_none() {
                self.dfs_label(v, count, &mut labels, |&c, _, e| {
                    (Some(e) != skip).then_some(c)
                });
                count += 1;
            }
        }
        (labels.into_iter().map(Option::unwrap_or_default).collect(), count)
    }
}

/// Parent pointers of a tree hung from a root vertex.
pub(crate) struct Rooted {
    /// `(parent vertex, edge to parent)`, `None` at the root.
    pub parent: Vec<Option<(usize, EdgeId)>>,
    pub depth: Vec<usize>,
}

impl Rooted {
    /// Only meaningful when `graph` is a tree.
    pub fn new(graph: &impl Graph, root: usize) -> Self {
        let mut labels: Vec<Option<(usize, Option<(usize, EdgeId)>)>> = vec![None; graph.order()];
        if graph.order() > 0 {
            graph.dfs_label(root, (0, None), &mut labels, |&(depth, _), current, edge| {
                Some((depth + 1, Some((current, edge))))
            });
        }
        let (depth, parent) = labels
            .into_iter()
            .map(|l| l.unwrap_or((0, None)))
            .unzip();
        Self { parent, depth }
    }

    /// Edges on the tree path between `a` and `b`.
    pub fn path(&self, mut a: usize, mut b: usize) -> impl Iterator<Item = EdgeId> + '_ {
        std::iter::from_fn(move || {
            if a == b {
                return None;
            }
            if self.depth[a] < self.depth[b] {
                std::mem::swap(&mut a, &mut b);
            }
            let (up, edge) = self.parent[a]?;
            a = up;
            Some(edge)
        })
    }
}
