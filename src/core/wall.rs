//! Wall classification states for maze edges.
//!
//! Every edge between two cells (or between a cell and the exterior)
//! carries one of seven classifications that reconcile repeated and
//! contradictory sensor reports into a stable verdict.

use serde::{Deserialize, Serialize};

/// Classification of a single maze edge.
///
/// The state hierarchy:
/// - `NotMapped` - never observed by any sensor
/// - `NotMappedNoWall` / `NotMappedWall` - observed once via the preview
///   path, not yet confirmed
/// - `NoWall` / `Wall` - confirmed by an authoritative observation
/// - `CorrectedNoWall` / `CorrectedWall` - a confirmed verdict was later
///   contradicted; the suffix names the verdict that now stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum WallState {
    /// Edge has never been observed
    #[default]
    NotMapped = 0,

    /// Observed absent, but not yet confirmed
    NotMappedNoWall = 1,

    /// Observed present, but not yet confirmed
    NotMappedWall = 2,

    /// Confirmed absent
    NoWall = 3,

    /// Confirmed present
    Wall = 4,

    /// Was confirmed present, a later observation confirmed absent
    CorrectedNoWall = 5,

    /// Was confirmed absent, a later observation confirmed present
    CorrectedWall = 6,
}

impl WallState {
    /// Does this edge currently read as a wall?
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(
            self,
            WallState::Wall | WallState::NotMappedWall | WallState::CorrectedWall
        )
    }

    /// Has this edge been confirmed by an authoritative observation?
    #[inline]
    pub fn is_confirmed(self) -> bool {
        matches!(
            self,
            WallState::NoWall
                | WallState::Wall
                | WallState::CorrectedNoWall
                | WallState::CorrectedWall
        )
    }

    /// Did a later observation contradict an earlier confirmed verdict?
    #[inline]
    pub fn is_corrected(self) -> bool {
        matches!(self, WallState::CorrectedNoWall | WallState::CorrectedWall)
    }

    /// Has this edge been observed at all?
    #[inline]
    pub fn is_mapped(self) -> bool {
        self != WallState::NotMapped
    }

    /// Apply an authoritative observation to this edge.
    ///
    /// An unprobed edge is left untouched. A probed edge moves to the
    /// confirmed verdict when the report agrees with everything seen so
    /// far, and to the corrected verdict when it contradicts a previous
    /// confirmation. A corrected edge re-confirmed in the same direction
    /// stays corrected; the contradiction marker is not cleared by
    /// agreement after the fact.
    pub fn advance(self, probed: bool, is_wall: bool) -> WallState {
        if !probed {
            return self;
        }

        if is_wall {
            match self {
                WallState::NotMapped | WallState::NotMappedWall | WallState::Wall => {
                    WallState::Wall
                }
                WallState::NotMappedNoWall
                | WallState::NoWall
                | WallState::CorrectedNoWall
                | WallState::CorrectedWall => WallState::CorrectedWall,
            }
        } else {
            match self {
                WallState::NotMapped | WallState::NotMappedNoWall | WallState::NoWall => {
                    WallState::NoWall
                }
                WallState::NotMappedWall
                | WallState::Wall
                | WallState::CorrectedNoWall
                | WallState::CorrectedWall => WallState::CorrectedNoWall,
            }
        }
    }

    /// Apply a speculative observation to this edge.
    ///
    /// Overwrites unconditionally with the unconfirmed reading and never
    /// promotes to a confirmed or corrected state. Used for display
    /// overlays where the report is not authoritative.
    pub fn advance_preview(self, probed: bool, is_wall: bool) -> WallState {
        if !probed {
            return self;
        }

        if is_wall {
            WallState::NotMappedWall
        } else {
            WallState::NotMappedNoWall
        }
    }

    /// All seven states, for exhaustive property checks
    pub const ALL: [WallState; 7] = [
        WallState::NotMapped,
        WallState::NotMappedNoWall,
        WallState::NotMappedWall,
        WallState::NoWall,
        WallState::Wall,
        WallState::CorrectedNoWall,
        WallState::CorrectedWall,
    ];
}
