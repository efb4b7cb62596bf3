//! Error types for hitvolume-core.

use thiserror::Error;

/// Result type alias for hitvolume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for hitvolume operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The two end centers of a volume coincide, so it has no axis.
    #[error("degenerate volume axis: end centers are {length} apart")]
    DegenerateAxis {
        /// Distance between the end centers.
        length: f64,
    },

    /// Cylinder radius is not a positive finite number.
    #[error("invalid cylinder radius: {0}")]
    InvalidRadius(f64),

    /// Prism cross-section is not positive and finite in both directions.
    #[error("invalid prism cross-section: {size_x} x {size_y}")]
    InvalidSize {
        /// Requested width along the local u direction.
        size_x: f64,
        /// Requested width along the local v direction.
        size_y: f64,
    },

    /// A volume parameter is NaN or infinite.
    #[error("non-finite volume parameter: {0}")]
    NonFinite(&'static str),

    /// Hit index beyond the end of a collection.
    #[error("hit index {index} out of bounds for collection of {len} hits")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of hits in the collection.
        len: usize,
    },
}
