//! Depth-first contour traversal

use crate::contour::{ContourTree, NodeId};

/// Result of one depth-first walk: the visitation order and the parent link
/// assigned to every node.
///
/// Parent links are scratch state of a single walk, not a property of the
/// contour: a new walk from a different root reassigns all of them. Exactly
/// one node (the root) has no parent; following parents from any node reaches
/// the root in at most N - 1 steps.
#[derive(Debug, Clone)]
pub struct Traversal {
    visit_order: Vec<NodeId>,
    parent: Vec<Option<NodeId>>,
}

impl Traversal {
    /// Nodes in the order they were visited; the root comes first.
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// The neighbor from which `id` was first reached, `None` for the root.
    ///
    /// `id` must address a node of the walked tree; out-of-range ids panic.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parent[id]
    }

    /// The tree edges as `(node, parent)` pairs in visitation order; the root
    /// contributes no pair. Every property integral folds over this sequence,
    /// so sibling visitation order never affects an aggregate.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.visit_order
            .iter()
            .filter_map(|&id| self.parent[id].map(|p| (id, p)))
    }
}

/// Walk the contour depth-first from `root`, visiting every node exactly once
/// and recording the parent link of each.
///
/// `root` must address a node of the tree; out-of-range ids panic. Callers
/// exposing user-supplied roots reject them at the query boundary before
/// starting a walk (see `CrossSection`).
pub fn walk(tree: &ContourTree, root: NodeId) -> Traversal {
    let n = tree.len();
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);
    let mut stack = vec![root];
    visited[root] = true;

    while let Some(current) = stack.pop() {
        visit_order.push(current);
        for &next in tree.links(current) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                stack.push(next);
            }
        }
    }

    Traversal {
        visit_order,
        parent,
    }
}
