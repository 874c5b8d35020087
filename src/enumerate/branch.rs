use std::cmp::Ordering;

use crate::graph::{cmp_weight, Weight};
use crate::substitute::EdgeRoles;
use crate::tree::SpanningTree;

/// A tree together with the edges its descendants must keep and must avoid.
///
/// Ordered by tree weight, then by the tree's edge list. Two live branches
/// never hold the same tree, so this order is total in practice.
#[derive(Debug, Clone)]
pub struct BranchNode<W> {
    tree: SpanningTree<W>,
    roles: EdgeRoles,
}

impl<W: Weight> BranchNode<W> {
    pub fn new(tree: SpanningTree<W>, roles: EdgeRoles) -> Self {
        Self { tree, roles }
    }

    pub fn tree(&self) -> &SpanningTree<W> {
        &self.tree
    }

    pub fn roles(&self) -> &EdgeRoles {
        &self.roles
    }

    pub fn weight(&self) -> W {
        self.tree.weight()
    }

    pub fn into_tree(self) -> SpanningTree<W> {
        self.tree
    }
}

impl<W: Weight> PartialEq for BranchNode<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for BranchNode<W> {}

impl<W: Weight> PartialOrd for BranchNode<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for BranchNode<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weight(&self.weight(), &other.weight())
            .then_with(|| self.tree.edges().cmp(other.tree.edges()))
    }
}
