//! Wall grid storage for the maze model.
//!
//! Holds the per-edge classifications and the visited-cell flags in flat,
//! index-computed arrays. The grid is owned exclusively by the engine;
//! the renderer only ever sees borrowed read-only views.

use crate::core::{CellCoord, Heading, WallState};
use crate::error::{MazeError, Result};

/// Maze wall grid.
///
/// The grid uses a coordinate system where:
/// - Cell (0, 0) is at the south-west corner
/// - Column index `x` increases eastward
/// - Row index `y` increases northward
///
/// ## Edge Layout
///
/// Horizontal edges form a `(rows + 1) x columns` grid: edge `[r, c]` is
/// the boundary between cell row `r - 1` and row `r` in column `c`, so
/// rows `0` and `rows` are the south and north outer borders. Vertical
/// edges form a `rows x (columns + 1)` grid: edge `[r, c]` separates cell
/// column `c - 1` from column `c` in row `r`, with columns `0` and
/// `columns` as the west and east borders.
///
/// For a cell `(x, y)` this means:
/// ```text
///          horizontal[y+1, x]
///         +-------------------+
///         |                   |
/// vertical|      (x, y)       |vertical
/// [y, x]  |                   |[y, x+1]
///         +-------------------+
///          horizontal[y, x]
/// ```
///
/// Border edges are initialized to [`WallState::Wall`] and every interior
/// edge to [`WallState::NotMapped`]; a full reset restores exactly that
/// layout.
#[derive(Clone, Debug)]
pub struct WallGrid {
    /// Horizontal edge states, row-major, `(rows + 1) * columns`
    horizontal: Vec<WallState>,
    /// Vertical edge states, row-major, `rows * (columns + 1)`
    vertical: Vec<WallState>,
    /// Visited flags, row-major, `rows * columns`
    visited: Vec<bool>,
    /// Grid height in cells
    rows: usize,
    /// Grid width in cells
    columns: usize,
}

impl WallGrid {
    /// Create a new grid with the given dimensions.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either dimension is
    /// zero. Border edges start as `Wall`, everything else as `NotMapped`.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }

        let mut grid = Self {
            horizontal: vec![WallState::NotMapped; (rows + 1) * columns],
            vertical: vec![WallState::NotMapped; rows * (columns + 1)],
            visited: vec![false; rows * columns],
            rows,
            columns,
        };
        grid.apply_border_walls();
        Ok(grid)
    }

    /// Grid height in cells
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Reallocate to new dimensions, discarding all observations.
    ///
    /// The new grids are fully constructed before the old ones are
    /// replaced, so a failed resize leaves the previous state intact.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<()> {
        *self = Self::new(rows, columns)?;
        Ok(())
    }

    /// Restore the freshly-constructed state without changing dimensions.
    pub fn reset(&mut self) {
        self.horizontal.fill(WallState::NotMapped);
        self.vertical.fill(WallState::NotMapped);
        self.visited.fill(false);
        self.apply_border_walls();
    }

    /// Set the outer boundary edges to `Wall`.
    fn apply_border_walls(&mut self) {
        for c in 0..self.columns {
            self.horizontal[c] = WallState::Wall;
            self.horizontal[self.rows * self.columns + c] = WallState::Wall;
        }
        for r in 0..self.rows {
            self.vertical[r * (self.columns + 1)] = WallState::Wall;
            self.vertical[r * (self.columns + 1) + self.columns] = WallState::Wall;
        }
    }

    /// Check that a decoded coordinate addresses an allocated cell.
    ///
    /// Every observation validates its coordinate through this before any
    /// edge is touched, so a bad coordinate never partially mutates the
    /// grid.
    #[inline]
    pub fn validate(&self, cell: CellCoord) -> Result<()> {
        if (cell.x as usize) < self.columns && (cell.y as usize) < self.rows {
            Ok(())
        } else {
            Err(MazeError::CoordinateOutOfRange {
                x: cell.x,
                y: cell.y,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Convert horizontal edge coordinates to a flat index
    #[inline]
    fn h_index(&self, row: usize, col: usize) -> Option<usize> {
        if row <= self.rows && col < self.columns {
            Some(row * self.columns + col)
        } else {
            None
        }
    }

    /// Convert vertical edge coordinates to a flat index
    #[inline]
    fn v_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col <= self.columns {
            Some(row * (self.columns + 1) + col)
        } else {
            None
        }
    }

    /// Horizontal edge state at `[row, col]` (NotMapped if out of bounds)
    #[inline]
    pub fn horizontal(&self, row: usize, col: usize) -> WallState {
        self.h_index(row, col)
            .map(|i| self.horizontal[i])
            .unwrap_or(WallState::NotMapped)
    }

    /// Vertical edge state at `[row, col]` (NotMapped if out of bounds)
    #[inline]
    pub fn vertical(&self, row: usize, col: usize) -> WallState {
        self.v_index(row, col)
            .map(|i| self.vertical[i])
            .unwrap_or(WallState::NotMapped)
    }

    /// Has the cell at `[row, col]` been visited? (false if out of bounds)
    #[inline]
    pub fn visited(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.columns {
            self.visited[row * self.columns + col]
        } else {
            false
        }
    }

    /// State of one edge of a cell.
    ///
    /// The cell coordinate must be in bounds (see [`WallGrid::validate`]);
    /// for an in-bounds cell all four edge indices exist by construction.
    #[inline]
    pub fn edge(&self, cell: CellCoord, heading: Heading) -> WallState {
        let (x, y) = (cell.x as usize, cell.y as usize);
        match heading {
            Heading::North => self.horizontal(y + 1, x),
            Heading::South => self.horizontal(y, x),
            Heading::East => self.vertical(y, x + 1),
            Heading::West => self.vertical(y, x),
        }
    }

    /// Overwrite one edge of a validated cell.
    #[inline]
    pub(crate) fn set_edge(&mut self, cell: CellCoord, heading: Heading, state: WallState) {
        let (x, y) = (cell.x as usize, cell.y as usize);
        let index = match heading {
            Heading::North => self.h_index(y + 1, x),
            Heading::South => self.h_index(y, x),
            Heading::East => self.v_index(y, x + 1),
            Heading::West => self.v_index(y, x),
        };
        debug_assert!(index.is_some(), "set_edge on unvalidated cell {:?}", cell);
        if let Some(i) = index {
            match heading {
                Heading::North | Heading::South => self.horizontal[i] = state,
                Heading::East | Heading::West => self.vertical[i] = state,
            }
        }
    }

    /// Mark a validated cell as visited.
    #[inline]
    pub(crate) fn set_visited(&mut self, cell: CellCoord) {
        let i = cell.y as usize * self.columns + cell.x as usize;
        self.visited[i] = true;
    }

    /// Raw horizontal edge states, row-major (for renderer bulk reads)
    #[inline]
    pub fn horizontal_raw(&self) -> &[WallState] {
        &self.horizontal
    }

    /// Raw vertical edge states, row-major
    #[inline]
    pub fn vertical_raw(&self) -> &[WallState] {
        &self.vertical
    }

    /// Raw visited flags, row-major
    #[inline]
    pub fn visited_raw(&self) -> &[bool] {
        &self.visited
    }

    /// Iterate over horizontal edges with their `[row, col]` coordinates
    pub fn iter_horizontal(&self) -> impl Iterator<Item = ((usize, usize), WallState)> + '_ {
        let columns = self.columns;
        self.horizontal
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i / columns, i % columns), state))
    }

    /// Iterate over vertical edges with their `[row, col]` coordinates
    pub fn iter_vertical(&self) -> impl Iterator<Item = ((usize, usize), WallState)> + '_ {
        let stride = self.columns + 1;
        self.vertical
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i / stride, i % stride), state))
    }

    /// Count edges by classification
    pub fn count_by_state(&self) -> WallCounts {
        let mut counts = WallCounts::default();
        for &state in self.horizontal.iter().chain(self.vertical.iter()) {
            match state {
                WallState::NotMapped => counts.not_mapped += 1,
                WallState::NotMappedNoWall => counts.preview_no_wall += 1,
                WallState::NotMappedWall => counts.preview_wall += 1,
                WallState::NoWall => counts.no_wall += 1,
                WallState::Wall => counts.wall += 1,
                WallState::CorrectedNoWall => counts.corrected_no_wall += 1,
                WallState::CorrectedWall => counts.corrected_wall += 1,
            }
        }
        counts.visited_cells = self.visited.iter().filter(|&&v| v).count();
        counts
    }

    /// Render the maze as ASCII art for logs and test diagnostics.
    ///
    /// Confirmed walls are `---`/`|`, corrected walls `===`/`!`, open
    /// passages blank, unmapped edges dotted, visited cells starred.
    pub fn to_ascii(&self) -> String {
        fn h_seg(state: WallState) -> char {
            match state {
                WallState::Wall | WallState::NotMappedWall => '-',
                WallState::CorrectedWall => '=',
                WallState::NoWall | WallState::NotMappedNoWall | WallState::CorrectedNoWall => ' ',
                WallState::NotMapped => '.',
            }
        }
        fn v_seg(state: WallState) -> char {
            match state {
                WallState::Wall | WallState::NotMappedWall => '|',
                WallState::CorrectedWall => '!',
                WallState::NoWall | WallState::NotMappedNoWall | WallState::CorrectedNoWall => ' ',
                WallState::NotMapped => '.',
            }
        }

        let mut out = String::new();
        for row in (0..=self.rows).rev() {
            for col in 0..self.columns {
                out.push('+');
                let seg = h_seg(self.horizontal(row, col));
                for _ in 0..3 {
                    out.push(seg);
                }
            }
            out.push_str("+\n");

            if row > 0 {
                let cell_row = row - 1;
                for col in 0..=self.columns {
                    out.push(v_seg(self.vertical(cell_row, col)));
                    if col < self.columns {
                        if self.visited(cell_row, col) {
                            out.push_str(" * ");
                        } else {
                            out.push_str("   ");
                        }
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

/// Edge counts by classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallCounts {
    /// Edges never observed
    pub not_mapped: usize,
    /// Edges with an unconfirmed no-wall reading
    pub preview_no_wall: usize,
    /// Edges with an unconfirmed wall reading
    pub preview_wall: usize,
    /// Edges confirmed absent
    pub no_wall: usize,
    /// Edges confirmed present
    pub wall: usize,
    /// Edges corrected to absent
    pub corrected_no_wall: usize,
    /// Edges corrected to present
    pub corrected_wall: usize,
    /// Cells marked visited
    pub visited_cells: usize,
}

impl WallCounts {
    /// Total edges confirmed one way or the other
    pub fn confirmed(&self) -> usize {
        self.no_wall + self.wall + self.corrected_no_wall + self.corrected_wall
    }

    /// Total edges whose confirmed verdict was contradicted at least once
    pub fn corrected(&self) -> usize {
        self.corrected_no_wall + self.corrected_wall
    }

    /// Total edges in the grid
    pub fn total(&self) -> usize {
        self.not_mapped
            + self.preview_no_wall
            + self.preview_wall
            + self.confirmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = WallGrid::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 6);
        assert_eq!(grid.cell_count(), 24);
        assert_eq!(grid.horizontal_raw().len(), 5 * 6);
        assert_eq!(grid.vertical_raw().len(), 4 * 7);
        assert_eq!(grid.visited_raw().len(), 24);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = WallGrid::new(0, 5).unwrap_err();
        assert_eq!(err, MazeError::InvalidDimension { rows: 0, columns: 5 });
        assert!(WallGrid::new(5, 0).is_err());
        assert!(WallGrid::new(0, 0).is_err());
    }

    #[test]
    fn test_border_invariant() {
        let grid = WallGrid::new(3, 4).unwrap();

        for col in 0..4 {
            assert_eq!(grid.horizontal(0, col), WallState::Wall, "south border");
            assert_eq!(grid.horizontal(3, col), WallState::Wall, "north border");
        }
        for row in 0..3 {
            assert_eq!(grid.vertical(row, 0), WallState::Wall, "west border");
            assert_eq!(grid.vertical(row, 4), WallState::Wall, "east border");
        }

        // Interior edges start unmapped, cells unvisited
        for row in 1..3 {
            for col in 0..4 {
                assert_eq!(grid.horizontal(row, col), WallState::NotMapped);
            }
        }
        for row in 0..3 {
            for col in 1..4 {
                assert_eq!(grid.vertical(row, col), WallState::NotMapped);
            }
        }
        assert!(grid.visited_raw().iter().all(|&v| !v));
    }

    #[test]
    fn test_failed_resize_preserves_grid() {
        let mut grid = WallGrid::new(4, 4).unwrap();
        grid.set_edge(CellCoord::new(1, 1), Heading::North, WallState::Wall);

        assert!(grid.resize(0, 5).is_err());

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.edge(CellCoord::new(1, 1), Heading::North), WallState::Wall);
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut grid = WallGrid::new(4, 4).unwrap();
        grid.set_edge(CellCoord::new(2, 2), Heading::East, WallState::CorrectedWall);
        grid.set_visited(CellCoord::new(2, 2));

        grid.reset();

        let fresh = WallGrid::new(4, 4).unwrap();
        assert_eq!(grid.horizontal_raw(), fresh.horizontal_raw());
        assert_eq!(grid.vertical_raw(), fresh.vertical_raw());
        assert_eq!(grid.visited_raw(), fresh.visited_raw());
    }

    #[test]
    fn test_edge_addressing_shares_boundaries() {
        let mut grid = WallGrid::new(4, 4).unwrap();

        // North edge of (1, 1) is the south edge of (1, 2)
        grid.set_edge(CellCoord::new(1, 1), Heading::North, WallState::Wall);
        assert_eq!(grid.edge(CellCoord::new(1, 2), Heading::South), WallState::Wall);

        // East edge of (1, 1) is the west edge of (2, 1)
        grid.set_edge(CellCoord::new(1, 1), Heading::East, WallState::NoWall);
        assert_eq!(grid.edge(CellCoord::new(2, 1), Heading::West), WallState::NoWall);
    }

    #[test]
    fn test_validate_bounds() {
        let grid = WallGrid::new(4, 4).unwrap();
        assert!(grid.validate(CellCoord::new(3, 3)).is_ok());
        assert_eq!(
            grid.validate(CellCoord::new(4, 0)),
            Err(MazeError::CoordinateOutOfRange {
                x: 4,
                y: 0,
                rows: 4,
                columns: 4
            })
        );
        assert!(grid.validate(CellCoord::new(0, 4)).is_err());
    }

    #[test]
    fn test_out_of_bounds_reads_are_not_mapped() {
        let grid = WallGrid::new(4, 4).unwrap();
        assert_eq!(grid.horizontal(9, 9), WallState::NotMapped);
        assert_eq!(grid.vertical(9, 9), WallState::NotMapped);
        assert!(!grid.visited(9, 9));
    }

    #[test]
    fn test_count_by_state() {
        let mut grid = WallGrid::new(4, 4).unwrap();
        let counts = grid.count_by_state();

        // 2 border rows of 4 + 2 border columns of 4
        assert_eq!(counts.wall, 16);
        assert_eq!(counts.total(), 5 * 4 + 4 * 5);
        assert_eq!(counts.not_mapped, counts.total() - 16);
        assert_eq!(counts.visited_cells, 0);

        grid.set_edge(CellCoord::new(1, 1), Heading::North, WallState::CorrectedWall);
        grid.set_visited(CellCoord::new(1, 1));
        let counts = grid.count_by_state();
        assert_eq!(counts.corrected_wall, 1);
        assert_eq!(counts.corrected(), 1);
        assert_eq!(counts.visited_cells, 1);
    }

    #[test]
    fn test_iterators_cover_all_edges() {
        let grid = WallGrid::new(2, 3).unwrap();
        assert_eq!(grid.iter_horizontal().count(), 3 * 3);
        assert_eq!(grid.iter_vertical().count(), 2 * 4);

        // Coordinates line up with the indexed getters
        for ((row, col), state) in grid.iter_horizontal() {
            assert_eq!(state, grid.horizontal(row, col));
        }
        for ((row, col), state) in grid.iter_vertical() {
            assert_eq!(state, grid.vertical(row, col));
        }
    }

    #[test]
    fn test_ascii_smoke() {
        let grid = WallGrid::new(2, 2).unwrap();
        let art = grid.to_ascii();
        // 3 horizontal lines + 2 cell lines
        assert_eq!(art.lines().count(), 5);
        // Fully walled top border
        assert!(art.starts_with("+---+---+"));
    }
}
