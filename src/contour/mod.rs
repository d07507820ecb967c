//! Contour graph built over wall-centerline samples
//!
//! A cross-section arrives as an unordered set of samples. This module turns
//! that set into a connected acyclic contour (a minimum spanning tree over an
//! index-addressed node arena) and provides the depth-first walk that every
//! property integral folds over.

pub mod node;
pub mod spanning_tree;
pub mod traversal;

pub use node::{Node, NodeId};
pub use spanning_tree::ContourTree;
pub use traversal::{walk, Traversal};
