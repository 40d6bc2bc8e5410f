//! Observation application for the wall grid.
//!
//! Turns one sensor report (packed cell coordinate + probed/wall flag
//! record) into per-edge state transitions:
//! - [`apply_observation`]: authoritative path with confirmation and
//!   correction (the normal sensing route)
//! - [`apply_preview`]: speculative overlay path, overwrite-only
//! - [`mark_visited`] / [`mark_route`]: re-assert a cell's existing edge
//!   verdicts while flagging it visited, for route replay

use log::{debug, trace};

use crate::core::{CellCoord, Heading, WallFlags};
use crate::error::Result;
use crate::grid::storage::WallGrid;

/// Result of applying one observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObserveOutcome {
    /// Edges the flag record marked as probed
    pub edges_probed: usize,
    /// Edges whose classification changed
    pub edges_changed: usize,
    /// Edges that entered a corrected state on this observation
    pub edges_corrected: usize,
}

/// Apply an authoritative observation to the four edges of one cell.
///
/// The coordinate is validated before any edge is touched, so an
/// out-of-range observation mutates nothing. Unprobed edges are left
/// untouched; probed edges go through [`WallState::advance`], which
/// confirms agreeing reports and flags contradictions as corrected.
///
/// [`WallState::advance`]: crate::core::WallState::advance
pub fn apply_observation(grid: &mut WallGrid, packed: u8, flags: WallFlags) -> Result<ObserveOutcome> {
    let cell = CellCoord::from_packed(packed);
    grid.validate(cell)?;

    let mut outcome = ObserveOutcome::default();
    for heading in Heading::ALL {
        let probed = flags.probed(heading);
        if probed {
            outcome.edges_probed += 1;
        }

        let previous = grid.edge(cell, heading);
        let next = previous.advance(probed, flags.wall(heading));
        if next != previous {
            outcome.edges_changed += 1;
            if next.is_corrected() && !previous.is_corrected() {
                outcome.edges_corrected += 1;
                debug!(
                    "Corrected {:?} edge of cell ({}, {}): {:?} -> {:?}",
                    heading, cell.x, cell.y, previous, next
                );
            } else {
                trace!(
                    "Mapped {:?} edge of cell ({}, {}): {:?} -> {:?}",
                    heading, cell.x, cell.y, previous, next
                );
            }
            grid.set_edge(cell, heading, next);
        }
    }

    Ok(outcome)
}

/// Apply a speculative observation to the four edges of one cell.
///
/// Same decoding and validation as [`apply_observation`], but probed
/// edges are overwritten with the unconfirmed reading unconditionally
/// and never promoted to a confirmed or corrected state.
pub fn apply_preview(grid: &mut WallGrid, packed: u8, flags: WallFlags) -> Result<ObserveOutcome> {
    let cell = CellCoord::from_packed(packed);
    grid.validate(cell)?;

    let mut outcome = ObserveOutcome::default();
    for heading in Heading::ALL {
        let probed = flags.probed(heading);
        if probed {
            outcome.edges_probed += 1;
        }

        let previous = grid.edge(cell, heading);
        let next = previous.advance_preview(probed, flags.wall(heading));
        if next != previous {
            outcome.edges_changed += 1;
            trace!(
                "Previewed {:?} edge of cell ({}, {}): {:?} -> {:?}",
                heading, cell.x, cell.y, previous, next
            );
            grid.set_edge(cell, heading, next);
        }
    }

    Ok(outcome)
}

/// Mark one cell visited and re-assert its current edge verdicts.
///
/// Each of the four edges is run through the authoritative rule with
/// `probed = true` and the edge's own current wall verdict as the
/// reading. Replaying a stored route this way reproduces the mapped
/// wall layout without the original raw sensor bits; an edge that had
/// drifted to an unconfirmed state is confirmed, and one that
/// contradicts an earlier confirmation is corrected as usual.
pub fn mark_visited(grid: &mut WallGrid, packed: u8) -> Result<()> {
    let cell = CellCoord::from_packed(packed);
    grid.validate(cell)?;
    mark_visited_cell(grid, cell);
    Ok(())
}

/// Mark a whole route of cells visited.
///
/// The bounds-checked replacement for a raw pointer-plus-length handoff:
/// every coordinate is validated up front and a bad batch mutates
/// nothing. Returns the number of cells marked.
pub fn mark_route(grid: &mut WallGrid, route: &[CellCoord]) -> Result<usize> {
    for &cell in route {
        grid.validate(cell)?;
    }
    for &cell in route {
        mark_visited_cell(grid, cell);
    }
    trace!("Marked route of {} cells visited", route.len());
    Ok(route.len())
}

/// Visited marking for a validated cell.
fn mark_visited_cell(grid: &mut WallGrid, cell: CellCoord) {
    grid.set_visited(cell);
    for heading in Heading::ALL {
        let previous = grid.edge(cell, heading);
        let next = previous.advance(true, previous.is_wall());
        if next != previous {
            grid.set_edge(cell, heading, next);
        }
    }
}
