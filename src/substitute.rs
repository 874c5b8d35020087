//! Substitute edges: for every free edge of a tree, the best non-tree edge
//! that can take its place.
//!
//! A non-tree edge crosses the fundamental cut of a tree edge exactly when
//! that tree edge lies on the non-tree edge's tree path. Candidates are
//! therefore visited once each, cheapest first, and each claims every
//! still-unassigned free tree edge on its path that the rule accepts.
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::traits::Rooted;
use crate::graph::{cmp_weight, EdgeId, Weight, WeightedGraph};
use crate::tree::SpanningTree;

/// How candidates of equal weight are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Canonical edge order: lexicographic by (smaller, larger) endpoint.
    #[default]
    Lexicographic,
    /// Position in the edge list the graph was built from.
    Insertion,
}

impl TieBreak {
    pub fn cmp<V, W: Copy>(self, graph: &WeightedGraph<V, W>, a: EdgeId, b: EdgeId) -> Ordering {
        match self {
            TieBreak::Lexicographic => a.cmp(&b),
            TieBreak::Insertion => graph
                .insertion_position(a)
                .cmp(&graph.insertion_position(b)),
        }
    }
}

/// `true` selects the ordered (lexicographic) tie-break.
impl From<bool> for TieBreak {
    fn from(ordered: bool) -> Self {
        if ordered {
            TieBreak::Lexicographic
        } else {
            TieBreak::Insertion
        }
    }
}

/// Which crossing edges qualify as a substitute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstituteRule {
    /// Only edges weighing the same as the edge they replace. Exchanges keep
    /// a minimum tree minimum.
    #[default]
    EqualWeight,
    /// The cheapest crossing edge of any weight.
    Cheapest,
}

impl SubstituteRule {
    fn accepts<W: Weight>(self, replaced: &W, candidate: &W) -> bool {
        match self {
            SubstituteRule::EqualWeight => cmp_weight(replaced, candidate) == Ordering::Equal,
            SubstituteRule::Cheapest => true,
        }
    }
}

/// Edges a branch must keep (`fixed`) and must never admit (`restricted`).
/// Edges in neither set are free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EdgeRoles {
    fixed: BTreeSet<EdgeId>,
    restricted: BTreeSet<EdgeId>,
}

impl EdgeRoles {
    /// Fails with [`Error::InvalidPartition`] on the first edge found in both sets.
    pub fn new(fixed: BTreeSet<EdgeId>, restricted: BTreeSet<EdgeId>) -> Result<Self> {
        if let Some(&edge) = fixed.intersection(&restricted).next() {
            return Err(Error::InvalidPartition { edge });
        }
        Ok(Self { fixed, restricted })
    }

    pub fn fixed(&self) -> &BTreeSet<EdgeId> {
        &self.fixed
    }

    pub fn restricted(&self) -> &BTreeSet<EdgeId> {
        &self.restricted
    }

    pub fn is_fixed(&self, edge: EdgeId) -> bool {
        self.fixed.contains(&edge)
    }

    pub fn is_restricted(&self, edge: EdgeId) -> bool {
        self.restricted.contains(&edge)
    }
}

/// Substitute of every tree edge, `None` where there is none. Fixed edges
/// are always `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituteMap {
    entries: BTreeMap<EdgeId, Option<EdgeId>>,
}

impl SubstituteMap {
    /// `None` both for tree edges without a substitute and for edges that
    /// are not in the tree.
    pub fn substitute(&self, edge: EdgeId) -> Option<EdgeId> {
        self.entries.get(&edge).copied().flatten()
    }

    pub fn contains(&self, edge: EdgeId) -> bool {
        self.entries.contains_key(&edge)
    }

    /// Entries in canonical order of the tree edge.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, Option<EdgeId>)> + '_ {
        self.entries.iter().map(|(&e, &s)| (e, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct SubstituteFinder<'g, V, W> {
    graph: &'g WeightedGraph<V, W>,
    rule: SubstituteRule,
    tie_break: TieBreak,
}

impl<'g, V, W: Weight> SubstituteFinder<'g, V, W> {
    pub fn new(graph: &'g WeightedGraph<V, W>) -> Self {
        Self {
            graph,
            rule: SubstituteRule::default(),
            tie_break: TieBreak::default(),
        }
    }

    pub fn rule(mut self, rule: SubstituteRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Substitutes for the free edges of `tree` under `roles`.
    ///
    /// Returns `Ok(None)` when no tree edge has a substitute, including when
    /// the graph has no edges outside the tree: no further distinct tree can be
    /// reached from this one.
    pub fn compute(&self, tree: &SpanningTree<W>, roles: &EdgeRoles) -> Result<Option<SubstituteMap>> {
        let graph = self.graph;
        let foreign = tree
            .edges()
            .iter()
            .chain(roles.fixed.iter())
            .chain(roles.restricted.iter())
            .find(|&&e| !graph.contains_edge(e));
        if let Some(&edge) = foreign {
            return Err(Error::UnknownEdge { edge });
        }

        let mut entries: BTreeMap<EdgeId, Option<EdgeId>> =
            tree.edges().iter().map(|&e| (e, None)).collect();
        let mut open = tree.edges().iter().filter(|&&e| !roles.is_fixed(e)).count();

        let mut candidates: Vec<EdgeId> = graph
            .edges()
            .filter(|&e| !tree.contains(e) && !roles.is_restricted(e))
            .collect();
        candidates.sort_by(|&a, &b| {
            cmp_weight(&graph.weight(a), &graph.weight(b))
                .then_with(|| self.tie_break.cmp(graph, a, b))
        });

        let rooted = Rooted::new(&tree.adjacency(graph), 0);
        for f in candidates {
            if open == 0 {
                break;
            }
            let data = graph.data(f);
            for e in rooted.path(data.lo, data.hi) {
                if roles.is_fixed(e) {
                    continue;
                }
                let Some(slot) = entries.get_mut(&e) else {
                    continue;
                };
                if slot.is_none() && self.rule.accepts(&graph.weight(e), &data.weight) {
                    *slot = Some(f);
                    open -= 1;
                }
            }
        }

        let found = entries.values().filter(|s| s.is_some()).count();
        trace!(tree_edges = entries.len(), found, rule = ?self.rule, "computed substitutes");
        if found == 0 {
            return Ok(None);
        }
        Ok(Some(SubstituteMap { entries }))
    }
}

/// Yamada's substitutes: equal-weight replacements for the free edges of
/// `tree`, with `tie_break` ranking equally weighted candidates.
pub fn compute_substitutes<V, W: Weight>(
    graph: &WeightedGraph<V, W>,
    tree: &SpanningTree<W>,
    fixed: &BTreeSet<EdgeId>,
    restricted: &BTreeSet<EdgeId>,
    tie_break: impl Into<TieBreak>,
) -> Result<Option<SubstituteMap>> {
    let roles = EdgeRoles::new(fixed.clone(), restricted.clone())?;
    SubstituteFinder::new(graph)
        .tie_break(tie_break.into())
        .compute(tree, &roles)
}

#[cfg(test)]
mod test {
    #[allow(unused_imports)]
    use super::*;

    const EDGES: [(u32, u32, i64); 17] = [
        (1, 2, 3),
        (1, 3, 12),
        (1, 10, 12),
        (2, 8, 12),
        (2, 10, 12),
        (3, 4, 7),
        (3, 5, 10),
        (3, 6, 10),
        (4, 7, 1),
        (4, 10, 10),
        (5, 6, 3),
        (5, 7, 13),
        (5, 8, 10),
        (6, 7, 10),
        (7, 9, 10),
        (8, 9, 6),
        (9, 10, 7),
    ];

    const TREE: [(u32, u32); 9] = [
        (1, 2),
        (2, 10),
        (10, 9),
        (9, 8),
        (9, 7),
        (7, 4),
        (7, 6),
        (4, 3),
        (6, 5),
    ];

    fn setup(edges: &[(u32, u32, i64)]) -> (WeightedGraph<u32, i64>, SpanningTree<i64>) {
        let graph = WeightedGraph::new(edges.iter().copied()).unwrap();
        let tree = SpanningTree::from_pairs(&graph, TREE).unwrap();
        (graph, tree)
    }

    fn e(graph: &WeightedGraph<u32, i64>, a: u32, b: u32) -> EdgeId {
        graph.find_edge(&a, &b).unwrap()
    }

    fn sub(graph: &WeightedGraph<u32, i64>, map: &SubstituteMap, a: u32, b: u32) -> Option<(u32, u32)> {
        map.substitute(e(graph, a, b)).map(|s| {
            let (x, y) = graph.endpoints(s);
            (*x, *y)
        })
    }

    #[test]
    fn test_substitute_edges() {
        let (graph, tree) = setup(&EDGES);
        let map = compute_substitutes(&graph, &tree, &BTreeSet::new(), &BTreeSet::new(), true)
            .unwrap()
            .unwrap();
        assert_eq!(map.len(), 9);
        assert_eq!(sub(&graph, &map, 1, 2), None);
        assert_eq!(sub(&graph, &map, 2, 10), Some((1, 3)));
        assert_eq!(sub(&graph, &map, 3, 4), None);
        assert_eq!(sub(&graph, &map, 4, 7), None);
        assert_eq!(sub(&graph, &map, 5, 6), None);
        assert_eq!(sub(&graph, &map, 6, 7), Some((3, 5)));
        assert_eq!(sub(&graph, &map, 7, 9), Some((4, 10)));
        assert_eq!(sub(&graph, &map, 8, 9), None);
        assert_eq!(sub(&graph, &map, 9, 10), None);
    }

    #[test]
    fn test_no_substitute_edges() {
        let in_tree = |&(a, b, _): &(u32, u32, i64)| {
            TREE.iter().any(|&(x, y)| (x, y) == (a, b) || (y, x) == (a, b))
        };
        let graph = WeightedGraph::new(EDGES.iter().copied().filter(in_tree)).unwrap();
        assert_eq!(graph.edge_count(), 9);
        let tree = SpanningTree::from_edges(&graph, graph.edges()).unwrap();
        let map = compute_substitutes(&graph, &tree, &BTreeSet::new(), &BTreeSet::new(), true);
        assert_eq!(map, Ok(None));
    }

    #[test]
    fn test_fixed_edges_are_never_replaced() {
        let (graph, tree) = setup(&EDGES);
        let fixed = BTreeSet::from([e(&graph, 6, 7)]);
        let map = compute_substitutes(&graph, &tree, &fixed, &BTreeSet::new(), true)
            .unwrap()
            .unwrap();
        assert!(map.contains(e(&graph, 6, 7)));
        assert_eq!(sub(&graph, &map, 6, 7), None);
        assert_eq!(sub(&graph, &map, 2, 10), Some((1, 3)));
        assert_eq!(sub(&graph, &map, 7, 9), Some((4, 10)));
    }

    #[test]
    fn test_restricted_edges_are_never_chosen() {
        let (graph, tree) = setup(&EDGES);
        let restricted = BTreeSet::from([e(&graph, 3, 5), e(&graph, 1, 3)]);
        let map = compute_substitutes(&graph, &tree, &BTreeSet::new(), &restricted, true)
            .unwrap()
            .unwrap();
        assert_eq!(sub(&graph, &map, 6, 7), Some((3, 6)));
        assert_eq!(sub(&graph, &map, 2, 10), Some((1, 10)));
    }

    #[test]
    fn test_nothing_substitutable_when_all_fixed() {
        let (graph, tree) = setup(&EDGES);
        let fixed: BTreeSet<EdgeId> = tree.edges().iter().copied().collect();
        let map = compute_substitutes(&graph, &tree, &fixed, &BTreeSet::new(), true);
        assert_eq!(map, Ok(None));
    }

    #[test]
    fn test_insertion_tie_break() {
        // (5, 8) listed ahead of (4, 10); both weigh 10 and cross the cut of (7, 9)
        let mut edges = EDGES.to_vec();
        let moved = edges.remove(12);
        assert_eq!(moved, (5, 8, 10));
        edges.insert(9, moved);
        let (graph, tree) = setup(&edges);

        let none = BTreeSet::new();
        let ordered = compute_substitutes(&graph, &tree, &none, &none, true).unwrap().unwrap();
        assert_eq!(sub(&graph, &ordered, 7, 9), Some((4, 10)));
        let unordered = compute_substitutes(&graph, &tree, &none, &none, false).unwrap().unwrap();
        assert_eq!(sub(&graph, &unordered, 7, 9), Some((5, 8)));
        assert_eq!(sub(&graph, &unordered, 6, 7), Some((3, 5)));
    }

    #[test]
    fn test_cheapest_rule() {
        let (graph, tree) = setup(&EDGES);
        let map = SubstituteFinder::new(&graph)
            .rule(SubstituteRule::Cheapest)
            .compute(&tree, &EdgeRoles::default())
            .unwrap()
            .unwrap();
        assert_eq!(sub(&graph, &map, 1, 2), Some((1, 3)));
        assert_eq!(sub(&graph, &map, 2, 10), Some((1, 3)));
        assert_eq!(sub(&graph, &map, 3, 4), Some((3, 5)));
        assert_eq!(sub(&graph, &map, 4, 7), Some((3, 5)));
        assert_eq!(sub(&graph, &map, 5, 6), Some((3, 5)));
        assert_eq!(sub(&graph, &map, 6, 7), Some((3, 5)));
        assert_eq!(sub(&graph, &map, 7, 9), Some((4, 10)));
        assert_eq!(sub(&graph, &map, 8, 9), Some((5, 8)));
        assert_eq!(sub(&graph, &map, 9, 10), Some((4, 10)));
    }

    #[test]
    fn test_substitutes_cross_the_cut() {
        let (graph, tree) = setup(&EDGES);
        let map = SubstituteFinder::new(&graph)
            .rule(SubstituteRule::Cheapest)
            .compute(&tree, &EdgeRoles::default())
            .unwrap()
            .unwrap();
        for (edge, substitute) in map.iter() {
            let substitute = substitute.unwrap();
            let (a, b) = tree.fundamental_cut(&graph, edge).unwrap();
            let crossing = graph.edges_crossing(&a, &b);
            assert!(crossing.contains(&substitute));
            let cheapest = crossing
                .iter()
                .filter(|&&c| c != edge)
                .map(|&c| graph.weight(c))
                .min()
                .unwrap();
            assert_eq!(graph.weight(substitute), cheapest);
            assert!(tree.swap(&graph, edge, substitute).is_ok());
        }
    }

    #[test]
    fn test_overlapping_partition() {
        let (graph, tree) = setup(&EDGES);
        let both = BTreeSet::from([e(&graph, 1, 2)]);
        let err = compute_substitutes(&graph, &tree, &both, &both, true).unwrap_err();
        assert_eq!(err, Error::InvalidPartition { edge: e(&graph, 1, 2) });
    }

    #[test]
    fn test_tie_break_from_flag() {
        assert_eq!(TieBreak::from(true), TieBreak::Lexicographic);
        assert_eq!(TieBreak::from(false), TieBreak::Insertion);
    }
}
