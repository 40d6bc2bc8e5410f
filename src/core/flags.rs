//! Sensor observation flag record.
//!
//! One observation covers up to four edges of a single cell. The flag
//! record carries a probed bit and a wall bit per heading; the engine
//! reads the record once per call and never stores it.

use bitflags::bitflags;

use super::coord::Heading;

bitflags! {
    /// 8-bit observation record: which edges were freshly probed, and
    /// which probed edges are walls.
    ///
    /// A wall bit is only meaningful when the matching probed bit is
    /// set; an unprobed edge is left untouched regardless of its wall
    /// bit.
    ///
    /// # Example
    ///
    /// ```
    /// use vyuha_map::WallFlags;
    ///
    /// let flags = WallFlags::PROBED_NORTH | WallFlags::WALL_NORTH | WallFlags::PROBED_EAST;
    /// assert!(flags.wall(vyuha_map::Heading::North));
    /// assert!(!flags.wall(vyuha_map::Heading::East));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WallFlags: u8 {
        /// North edge was probed this observation.
        const PROBED_NORTH = 1 << 0;
        /// East edge was probed this observation.
        const PROBED_EAST = 1 << 1;
        /// South edge was probed this observation.
        const PROBED_SOUTH = 1 << 2;
        /// West edge was probed this observation.
        const PROBED_WEST = 1 << 3;

        /// North edge reads as a wall.
        const WALL_NORTH = 1 << 4;
        /// East edge reads as a wall.
        const WALL_EAST = 1 << 5;
        /// South edge reads as a wall.
        const WALL_SOUTH = 1 << 6;
        /// West edge reads as a wall.
        const WALL_WEST = 1 << 7;
    }
}

impl WallFlags {
    /// Was the edge towards `heading` probed?
    #[inline]
    pub fn probed(self, heading: Heading) -> bool {
        self.contains(match heading {
            Heading::North => WallFlags::PROBED_NORTH,
            Heading::East => WallFlags::PROBED_EAST,
            Heading::South => WallFlags::PROBED_SOUTH,
            Heading::West => WallFlags::PROBED_WEST,
        })
    }

    /// Does the edge towards `heading` read as a wall?
    #[inline]
    pub fn wall(self, heading: Heading) -> bool {
        self.contains(match heading {
            Heading::North => WallFlags::WALL_NORTH,
            Heading::East => WallFlags::WALL_EAST,
            Heading::South => WallFlags::WALL_SOUTH,
            Heading::West => WallFlags::WALL_WEST,
        })
    }

    /// Record for a single probed edge.
    #[inline]
    pub fn single(heading: Heading, is_wall: bool) -> WallFlags {
        let probed = match heading {
            Heading::North => WallFlags::PROBED_NORTH,
            Heading::East => WallFlags::PROBED_EAST,
            Heading::South => WallFlags::PROBED_SOUTH,
            Heading::West => WallFlags::PROBED_WEST,
        };
        if is_wall {
            let wall = match heading {
                Heading::North => WallFlags::WALL_NORTH,
                Heading::East => WallFlags::WALL_EAST,
                Heading::South => WallFlags::WALL_SOUTH,
                Heading::West => WallFlags::WALL_WEST,
            };
            probed | wall
        } else {
            probed
        }
    }
}
