//! Maze wall grid implementation.
//!
//! This module provides the wall-state grid and its update mechanisms:
//!
//! - [`WallGrid`]: Edge/visited storage with border-wall initialization
//! - [`observe`]: Apply sensor observations to a cell's four edges
//! - Configuration types for sizing the grid
//!
//! [`observe`]: crate::grid::observe

mod config;
pub mod observe;
mod storage;

pub use config::{ConfigError, MazeConfig};
pub use observe::ObserveOutcome;
pub use storage::{WallCounts, WallGrid};
