//! Cell coordinates and edge headings for the maze grid.

use serde::{Deserialize, Serialize};

/// Maze cell coordinates (integer cell indices)
///
/// The origin cell (0, 0) is at the south-west corner of the maze:
/// `x` is the column index increasing eastward, `y` is the row index
/// increasing northward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    /// X coordinate (column index)
    pub x: u8,
    /// Y coordinate (row index)
    pub y: u8,
}

impl CellCoord {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Decode a packed single-byte coordinate.
    ///
    /// The column occupies the low nibble and the row the high nibble,
    /// so one byte addresses cells in a maze up to 16x16. Range checking
    /// against the actual grid dimensions happens at the grid boundary,
    /// not here.
    #[inline]
    pub fn from_packed(packed: u8) -> Self {
        Self {
            x: packed & 0x0F,
            y: packed >> 4,
        }
    }

    /// Pack into a single byte as `(y << 4) | x`.
    ///
    /// Only meaningful for coordinates below 16 in both axes; larger
    /// mazes must hand over `CellCoord` values directly.
    #[inline]
    pub fn to_packed(self) -> u8 {
        debug_assert!(self.x < 16 && self.y < 16);
        (self.y << 4) | (self.x & 0x0F)
    }
}

/// Compass heading identifying one of a cell's four edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Towards increasing row index
    North,
    /// Towards increasing column index
    East,
    /// Towards decreasing row index
    South,
    /// Towards decreasing column index
    West,
}

impl Heading {
    /// All four headings, in N/E/S/W order
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];
}
