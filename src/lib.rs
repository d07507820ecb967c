//! Thinwall - sectorial properties of open thin-walled cross-sections
//!
//! This library computes geometric and sectorial (warping) properties of an
//! open thin-walled cross-section described by discrete wall-centerline
//! samples with local thickness:
//! - Section area and gravity center
//! - Centroidal principal moments of inertia (Ix, Iy) and polar moment (Ip)
//! - Rigidity (shear) center
//! - Sectorial static / linear static moments (Sw, Swx, Swy)
//! - Sectorial (warping) moment of inertia (Iw)
//!
//! The samples do not need to be ordered along the contour: construction
//! connects them into a minimum spanning tree and every property is a line
//! integral folded over depth-first traversals of that tree.
//!
//! ## Example
//! ```rust
//! use thinwall::prelude::*;
//!
//! // A straight vertical wall, 50 units long, 2 units thick
//! let nodes = vec![
//!     Node::new(0.0, -25.0, 2.0),
//!     Node::new(0.0, 0.0, 2.0),
//!     Node::new(0.0, 25.0, 2.0),
//! ];
//!
//! let mut section = CrossSection::new(nodes).unwrap();
//!
//! let area = section.section_area();
//! assert!((area - 100.0).abs() < 1e-9);
//!
//! let gc = section.gravity_center().unwrap();
//! assert!(gc.x.abs() < 1e-9 && gc.y.abs() < 1e-9);
//! ```

pub mod contour;
pub mod error;
pub mod geometry;
pub mod section;

/// 2-D coordinate used for samples, centers and poles.
pub type Point = nalgebra::Point2<f64>;

// Re-export common types
pub mod prelude {
    pub use crate::contour::{ContourTree, Node, NodeId};
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::section::CrossSection;
    pub use crate::Point;
}
