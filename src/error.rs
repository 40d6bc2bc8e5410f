//! Error types for vyuha-map.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, MazeError>;

/// Maze model error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid constructed or resized with a zero dimension
    #[error("Invalid maze dimensions: {rows}x{columns} (rows and columns must be at least 1)")]
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        columns: usize,
    },

    /// Decoded cell coordinate falls outside the allocated grid
    #[error("Cell ({x}, {y}) out of range for a {columns}x{rows} maze")]
    CoordinateOutOfRange {
        /// Decoded column index
        x: u8,
        /// Decoded row index
        y: u8,
        /// Grid row count
        rows: usize,
        /// Grid column count
        columns: usize,
    },
}
