//! Top-level maze model facade.
//!
//! [`MazeMap`] owns the wall grid exclusively and exposes the small call
//! surface the sensing/solving collaborator writes through and the
//! renderer reads through. All operations are synchronous and complete
//! before returning; the embedding application coordinates any
//! cross-thread access.

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::core::{CellCoord, WallFlags};
use crate::error::Result;
use crate::grid::observe::{
    apply_observation, apply_preview, mark_route, mark_visited,
};
use crate::grid::{MazeConfig, ObserveOutcome, WallGrid};

/// Model-change notification sent to a subscribed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// The grid was reset to the all-unmapped state
    Reset,
    /// The grid was reallocated with new dimensions
    Resized {
        /// New row count
        rows: usize,
        /// New column count
        columns: usize,
    },
}

/// Live maze model.
///
/// Created from a [`MazeConfig`], populated incrementally by observation
/// calls, and read back through the [`walls`](MazeMap::walls) view.
///
/// # Example
///
/// ```
/// use vyuha_map::{Heading, MazeMap, WallFlags, WallState};
///
/// let mut map = MazeMap::with_dimensions(4, 4)?;
///
/// // Cell (1, 1) reports a wall to the north, open to the east
/// let flags = WallFlags::single(Heading::North, true) | WallFlags::single(Heading::East, false);
/// let outcome = map.observe(0x11, flags)?;
/// assert_eq!(outcome.edges_probed, 2);
///
/// let cell = vyuha_map::CellCoord::new(1, 1);
/// assert_eq!(map.walls().edge(cell, Heading::North), WallState::Wall);
/// assert_eq!(map.walls().edge(cell, Heading::East), WallState::NoWall);
/// # Ok::<(), vyuha_map::MazeError>(())
/// ```
#[derive(Debug)]
pub struct MazeMap {
    /// Wall and visited-cell storage
    grid: WallGrid,
    /// Change-notification sink, if anyone subscribed
    events: Option<Sender<MapEvent>>,
}

impl MazeMap {
    /// Create a map from a configuration.
    pub fn new(config: &MazeConfig) -> Result<Self> {
        Self::with_dimensions(config.rows, config.columns)
    }

    /// Create a map with explicit dimensions.
    pub fn with_dimensions(rows: usize, columns: usize) -> Result<Self> {
        Ok(Self {
            grid: WallGrid::new(rows, columns)?,
            events: None,
        })
    }

    /// Subscribe to model-change notifications.
    ///
    /// Replaces any previous subscription. Events are delivered on an
    /// unbounded channel; a dropped receiver is ignored by the senders.
    pub fn subscribe(&mut self) -> Receiver<MapEvent> {
        let (tx, rx) = unbounded();
        self.events = Some(tx);
        rx
    }

    /// Read-only view of the wall and visited grids.
    pub fn walls(&self) -> &WallGrid {
        &self.grid
    }

    /// Grid height in cells
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Grid width in cells
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Apply an authoritative sensor observation.
    ///
    /// `packed` is the cell coordinate as `(y << 4) | x`; `flags` carries
    /// the probed/wall bit per heading. See
    /// [`observe::apply_observation`](crate::grid::observe::apply_observation).
    pub fn observe(&mut self, packed: u8, flags: WallFlags) -> Result<ObserveOutcome> {
        apply_observation(&mut self.grid, packed, flags)
    }

    /// Apply a speculative observation for display overlays.
    pub fn observe_preview(&mut self, packed: u8, flags: WallFlags) -> Result<ObserveOutcome> {
        apply_preview(&mut self.grid, packed, flags)
    }

    /// Mark one cell visited, re-asserting its edge verdicts.
    pub fn mark_visited(&mut self, packed: u8) -> Result<()> {
        mark_visited(&mut self.grid, packed)
    }

    /// Mark a route of cells visited, all-or-nothing.
    pub fn mark_route(&mut self, route: &[CellCoord]) -> Result<usize> {
        mark_route(&mut self.grid, route)
    }

    /// Reallocate the grid with new dimensions and notify subscribers.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<()> {
        self.grid.resize(rows, columns)?;
        debug!("Maze resized to {}x{}", rows, columns);
        self.send(MapEvent::Resized { rows, columns });
        Ok(())
    }

    /// Reset the grid without emitting a notification.
    pub fn reset(&mut self) {
        self.grid.reset();
        debug!("Maze reset ({}x{})", self.grid.rows(), self.grid.columns());
    }

    /// Reset the grid and notify subscribers.
    pub fn reset_and_notify(&mut self) {
        self.reset();
        self.send(MapEvent::Reset);
    }

    fn send(&self, event: MapEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}
