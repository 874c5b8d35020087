//! Spanning trees in non-decreasing weight by branch-and-bound tree exchange.
//!
//! Each branch owns the lightest tree of its part of the search space. When
//! popped it partitions the rest of that space by its free edges
//! `e1 .. ek` in canonical order: child `i` keeps `e1 .. e(i-1)` fixed,
//! forbids `ei`, and starts from the tree with `ei` exchanged for its
//! substitute. The parts are disjoint and cover everything except the
//! popped tree, so each tree is produced by exactly one branch.
mod branch;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

pub use branch::BranchNode;

use crate::config::EnumeratorConfig;
use crate::error::Result;
use crate::graph::{Weight, WeightedGraph};
use crate::substitute::{EdgeRoles, SubstituteFinder};
use crate::tree::{minimum_spanning_tree, SpanningTree};

/// Lazily yields spanning trees, lightest first.
///
/// Nothing is computed until the next tree is requested. An error from tree
/// exchange is yielded once and ends the sequence.
pub struct TreeEnumerator<'g, V, W> {
    graph: &'g WeightedGraph<V, W>,
    finder: SubstituteFinder<'g, V, W>,
    queue: BinaryHeap<Reverse<BranchNode<W>>>,
    limit: Option<usize>,
    emitted: usize,
    failed: bool,
}

impl<'g, V, W: Weight> TreeEnumerator<'g, V, W> {
    pub fn new(graph: &'g WeightedGraph<V, W>) -> Self {
        Self::with_config(graph, EnumeratorConfig::default())
    }

    pub fn with_config(graph: &'g WeightedGraph<V, W>, config: EnumeratorConfig) -> Self {
        let finder = SubstituteFinder::new(graph)
            .rule(config.scope.rule())
            .tie_break(config.tie_break);
        let root = BranchNode::new(minimum_spanning_tree(graph), EdgeRoles::default());
        debug!(weight = ?root.weight(), ?config, "seeded enumeration");
        Self {
            graph,
            finder,
            queue: BinaryHeap::from([Reverse(root)]),
            limit: config.limit,
            emitted: 0,
            failed: false,
        }
    }

    /// Branches waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn exhausted(&self) -> bool {
        self.failed || self.limit.is_some_and(|limit| self.emitted >= limit)
    }

    fn expand(&self, branch: &BranchNode<W>) -> Result<Vec<BranchNode<W>>> {
        let Some(substitutes) = self.finder.compute(branch.tree(), branch.roles())? else {
            return Ok(Vec::new());
        };

        let mut children = Vec::new();
        let mut fixed = branch.roles().fixed().clone();
        for (edge, substitute) in substitutes.iter() {
            if branch.roles().is_fixed(edge) {
                continue;
            }
            if let Some(substitute) = substitute {
                let tree = branch.tree().swap(self.graph, edge, substitute)?;
                let mut restricted = branch.roles().restricted().clone();
                restricted.insert(edge);
                trace!(?edge, ?substitute, weight = ?tree.weight(), "spawned branch");
                children.push(BranchNode::new(tree, EdgeRoles::new(fixed.clone(), restricted)?));
            }
            fixed.insert(edge);
        }
        Ok(children)
    }
}

impl<V, W: Weight> Iterator for TreeEnumerator<'_, V, W> {
    type Item = Result<SpanningTree<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }
        let Reverse(branch) = self.queue.pop()?;
        self.emitted += 1;
        // the last tree asked for needs no children
        if !self.exhausted() {
            match self.expand(&branch) {
                Ok(children) => self.queue.extend(children.into_iter().map(Reverse)),
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
        debug!(
            n = self.emitted,
            weight = ?branch.weight(),
            pending = self.queue.len(),
            "emitted spanning tree"
        );
        Some(Ok(branch.into_tree()))
    }
}

/// Spanning trees of `graph` in non-decreasing weight, at most `k` of them.
pub fn enumerate_spanning_trees<V, W: Weight>(
    graph: &WeightedGraph<V, W>,
    k: Option<usize>,
) -> TreeEnumerator<'_, V, W> {
    TreeEnumerator::with_config(graph, EnumeratorConfig::default().limit(k))
}
