//! Spanning tree construction - greedy nearest-neighbor contour growth

use serde::{Deserialize, Serialize};

use crate::contour::{Node, NodeId};
use crate::error::{SectionError, SectionResult};

/// A connected acyclic contour over a node arena.
///
/// Built once at construction; `links` holds the undirected tree adjacency
/// (each edge recorded on both endpoints) and is never mutated afterward.
/// `order` is the order in which nodes joined the connected set; `order[0]`
/// is the seed and serves as the reference root for the fixed-root property
/// integrals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourTree {
    nodes: Vec<Node>,
    links: Vec<Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl ContourTree {
    /// Connect an ordered, non-empty collection of samples into a minimum
    /// spanning tree.
    ///
    /// Greedy frontier growth (Prim): the last sample of the input order
    /// seeds the connected set; each step connects the closest
    /// (connected, disconnected) pair found by exhaustive scan, first
    /// minimal pair in iteration order winning ties. A single sample yields
    /// a trivial edgeless tree.
    pub fn connect(nodes: Vec<Node>) -> SectionResult<Self> {
        if nodes.is_empty() {
            return Err(SectionError::EmptyInput);
        }

        let n = nodes.len();
        let mut links: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        let mut disconnected: Vec<NodeId> = (0..n - 1).collect();
        let mut order: Vec<NodeId> = vec![n - 1];

        while !disconnected.is_empty() {
            // Seed the scan with the first (connected, disconnected) pair so
            // ties resolve to the first minimal pair in iteration order.
            let mut closest = (order[0], 0);
            let mut min_dist = nodes[closest.0].distance_to(&nodes[disconnected[0]]);

            for &c in &order {
                for (slot, &d) in disconnected.iter().enumerate() {
                    let dist = nodes[c].distance_to(&nodes[d]);
                    if dist < min_dist {
                        min_dist = dist;
                        closest = (c, slot);
                    }
                }
            }

            let (c, slot) = closest;
            let d = disconnected.remove(slot);
            links[c].push(d);
            links[d].push(c);
            order.push(d);
        }

        Ok(Self {
            nodes,
            links,
            order,
        })
    }

    /// Number of nodes in the contour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A connected contour always holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All samples, in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The sample at `id`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Whether `id` addresses a node of this contour.
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    /// Tree neighbors of `id`.
    pub fn links(&self, id: NodeId) -> &[NodeId] {
        &self.links[id]
    }

    /// Nodes in the order they joined the connected set.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// The seed of the contour, used as root for all fixed-root integrals.
    pub fn reference_root(&self) -> NodeId {
        self.order[0]
    }

    /// Number of undirected edges (N - 1 for a tree).
    pub fn edge_count(&self) -> usize {
        self.links.iter().map(|l| l.len()).sum::<usize>() / 2
    }

    /// Sum of Euclidean edge lengths over the tree.
    pub fn total_edge_length(&self) -> f64 {
        let mut total = 0.0;
        for (id, neighbors) in self.links.iter().enumerate() {
            for &other in neighbors {
                if other > id {
                    total += self.nodes[id].distance_to(&self.nodes[other]);
                }
            }
        }
        total
    }
}
