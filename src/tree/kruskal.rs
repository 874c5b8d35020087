//! Greedy (Kruskal) minimum spanning tree, used to seed enumeration.

use super::SpanningTree;
use crate::graph::{cmp_weight, EdgeId, Weight, WeightedGraph};

/// Union-find with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut x = x;
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let (px, py) = (self.find(x), self.find(y));
        if px == py {
            return false;
        }
        match self.rank[px].cmp(&self.rank[py]) {
            std::cmp::Ordering::Less => self.parent[px] = py,
            std::cmp::Ordering::Greater => self.parent[py] = px,
            std::cmp::Ordering::Equal => {
                self.parent[py] = px;
                self.rank[px] += 1;
            }
        }
        true
    }
}

/// A minimum spanning tree of `graph`. Equal weights are taken in canonical
/// edge order, so the result is the same on every run.
pub fn minimum_spanning_tree<V, W: Weight>(graph: &WeightedGraph<V, W>) -> SpanningTree<W> {
    let n = graph.order();
    let mut order: Vec<EdgeId> = graph.edges().collect();
    order.sort_by(|&a, &b| cmp_weight(&graph.data(a).weight, &graph.data(b).weight).then(a.cmp(&b)));

    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut weight = W::zero();
    for e in order {
        let data = graph.data(e);
        if uf.union(data.lo, data.hi) {
            edges.push(e);
            weight = weight + data.weight;
            if edges.len() + 1 == n {
                break;
            }
        }
    }
    // connected by construction
    debug_assert_eq!(edges.len() + 1, n);
    edges.sort();
    SpanningTree::from_sorted_unchecked(edges, weight)
}

#[cfg(test)]
mod test {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_minimum_spanning_tree() {
        let graph = WeightedGraph::new([
            (1u32, 2u32, 2i64),
            (1, 3, 1),
            (2, 3, 3),
            (2, 4, 1),
            (3, 4, 2),
            (3, 5, 2),
            (4, 5, 1),
            (4, 6, 3),
            (5, 6, 3),
        ])
        .unwrap();
        let tree = minimum_spanning_tree(&graph);
        assert_eq!(tree.weight(), 8);
        assert_eq!(tree.len(), 5);
        // (1, 2) beats (3, 4) on the tie at weight 2, (4, 6) beats (5, 6) at 3
        assert_eq!(
            tree.pairs(&graph)
                .into_iter()
                .map(|(a, b, _)| (a, b))
                .collect::<Vec<_>>(),
            vec![(1, 2), (1, 3), (2, 4), (4, 5), (4, 6)]
        );
    }

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_single_vertex() {
        let graph = WeightedGraph::<u32, f64>::with_vertices([1], []).unwrap();
        let tree = minimum_spanning_tree(&graph);
        assert!(tree.is_empty());
        assert_eq!(tree.weight(), 0.0);
    }
}
