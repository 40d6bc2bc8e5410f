//! Core types for the vyuha-map maze model.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`WallState`]: Per-edge classification with the reconciliation rules
//! - [`CellCoord`] and [`Heading`]: Cell addressing and edge selection
//! - [`WallFlags`]: The 8-bit probed/wall observation record

mod coord;
mod flags;
mod wall;

pub use coord::{CellCoord, Heading};
pub use flags::WallFlags;
pub use wall::WallState;
