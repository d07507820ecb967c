//! Error types for the section property solver

use thiserror::Error;

/// Main error type for cross-section computations
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Cross-section requires at least one node")]
    EmptyInput,

    #[error("Node index {0} is outside the contour")]
    NodeNotFound(usize),

    #[error("Section area is degenerate ({0:.3e}) - centroid-dependent quantities are undefined")]
    DegenerateArea(f64),

    #[error("Inertia moment about the {axis}-axis is degenerate ({value:.3e}) - rigidity center is undefined")]
    DegenerateInertia {
        /// Axis label, "x" or "y"
        axis: char,
        /// The near-zero inertia moment that would be divided by
        value: f64,
    },
}

/// Result type for cross-section computations
pub type SectionResult<T> = Result<T, SectionError>;
