//! # Vyuha-Map: Wall-State Maze Mapping Library
//!
//! A live model of a maze's internal walls for micromouse robots. An
//! external sensing/solving component reports observations cell by cell;
//! the engine reconciles repeated and contradictory reports into a stable
//! per-edge classification and exposes the model to a renderer as
//! read-only views.
//!
//! ## Features
//!
//! - **Seven-state edge classification**: unmapped, unconfirmed,
//!   confirmed, and corrected verdicts per edge, so contradictory sensor
//!   reports are surfaced instead of silently overwritten
//! - **Packed-byte observation protocol**: one byte addresses any cell of
//!   a 16x16 maze, one byte carries the probed/wall record for all four
//!   edges
//! - **Exclusive grid ownership**: flat index-computed arrays owned by
//!   the engine, borrowed read-only by the renderer
//! - **Route replay**: visited-cell marking re-asserts mapped verdicts
//!   without the original raw sensor bits
//!
//! ## Quick Start
//!
//! ```rust
//! use vyuha_map::{CellCoord, Heading, MazeMap, WallFlags, WallState};
//!
//! let mut map = MazeMap::with_dimensions(16, 16)?;
//!
//! // The mouse probes cell (0, 0): wall to the east, open to the north
//! let flags = WallFlags::single(Heading::East, true) | WallFlags::single(Heading::North, false);
//! map.observe(0x00, flags)?;
//! map.mark_visited(0x00)?;
//!
//! let origin = CellCoord::new(0, 0);
//! assert_eq!(map.walls().edge(origin, Heading::East), WallState::Wall);
//! assert_eq!(map.walls().edge(origin, Heading::North), WallState::NoWall);
//! assert!(map.walls().visited(0, 0));
//! # Ok::<(), vyuha_map::MazeError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! Cell (0, 0) sits at the south-west corner: `x` is the column index
//! increasing eastward, `y` the row index increasing northward. The packed
//! coordinate byte is `(y << 4) | x`. Edge grids are indexed
//! `[row, column]` with horizontal row 0 as the south border and vertical
//! column 0 as the west border; see [`WallGrid`] for the full layout.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`CellCoord`], [`Heading`],
//!   [`WallState`], [`WallFlags`]) and the pure transition rules
//! - [`grid`]: [`WallGrid`] storage, observation application, and
//!   configuration
//! - [`MazeMap`]: The facade tying grid, observations, and change
//!   notification together
//!
//! ## Data Flow
//!
//! ```text
//!  ┌──────────────────┐ observe(packed, flags)  ┌──────────────────┐
//!  │  Sensing/solving │────────────────────────►│     MazeMap      │
//!  │   collaborator   │ mark_visited / resize   │                  │
//!  └──────────────────┘                         │  ┌────────────┐  │
//!                                               │  │  WallGrid  │  │
//!  ┌──────────────────┐     walls() (&view)     │  │ horizontal │  │
//!  │     Renderer     │◄────────────────────────│  │ vertical   │  │
//!  │                  │                         │  │ visited    │  │
//!  └──────────────────┘                         │  └────────────┘  │
//!  ┌──────────────────┐   Receiver<MapEvent>    │                  │
//!  │    Subscriber    │◄────────────────────────│                  │
//!  └──────────────────┘                         └──────────────────┘
//! ```
//!
//! The engine is single-threaded and synchronous: every operation runs to
//! completion, holds no locks, spawns no background work, and performs no
//! I/O. Writer and reader are coordinated by the embedding application.

pub mod core;
pub mod error;
pub mod grid;
mod maze_map;

// Re-export main types at crate root
pub use crate::core::{CellCoord, Heading, WallFlags, WallState};
pub use error::{MazeError, Result};
pub use grid::{ConfigError, MazeConfig, ObserveOutcome, WallCounts, WallGrid};
pub use maze_map::{MapEvent, MazeMap};
