//! Node - a wall-centerline sample

use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::Point;

/// Index of a node in the contour arena.
///
/// Adjacency, parent links and the sectorial-area field are all keyed by this
/// index instead of by node identity, so nodes themselves stay immutable.
pub type NodeId = usize;

/// A wall-centerline sample: a 2-D point with the local wall thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position of the sample on the wall centerline
    pub point: Point,
    /// Wall thickness at the sample, > 0 in valid input
    pub thickness: f64,
}

impl Node {
    /// Create a sample at the given coordinates.
    pub fn new(x: f64, y: f64, thickness: f64) -> Self {
        Self {
            point: Point::new(x, y),
            thickness,
        }
    }

    /// Create a sample at an existing point.
    pub fn at(point: Point, thickness: f64) -> Self {
        Self { point, thickness }
    }

    /// Euclidean distance to another sample.
    pub fn distance_to(&self, other: &Node) -> f64 {
        geometry::distance(&self.point, &other.point)
    }
}
