//! End-to-end maze mapping scenario.
//!
//! Drives a small maze the way a solver would: explore cell by cell with
//! authoritative observations, contradict an earlier reading, replay the
//! route, and read the model back the way a renderer would.

use vyuha_map::{
    CellCoord, Heading, MapEvent, MazeConfig, MazeMap, WallFlags, WallState,
};

/// Observation record for one cell: all four edges probed.
fn full_probe(north: bool, east: bool, south: bool, west: bool) -> WallFlags {
    WallFlags::single(Heading::North, north)
        | WallFlags::single(Heading::East, east)
        | WallFlags::single(Heading::South, south)
        | WallFlags::single(Heading::West, west)
}

#[test]
fn explore_two_cell_corridor() {
    let mut map = MazeMap::with_dimensions(4, 4).unwrap();

    // Mouse starts at (0, 0): walls everywhere except north
    let outcome = map
        .observe(CellCoord::new(0, 0).to_packed(), full_probe(false, true, true, true))
        .unwrap();
    assert_eq!(outcome.edges_probed, 4);
    // South/west re-confirm the border, so only north and east change
    assert_eq!(outcome.edges_changed, 2);
    assert_eq!(outcome.edges_corrected, 0);
    map.mark_visited(0x00).unwrap();

    // Moves north to (0, 1): open further north, walls east and west
    map.observe(CellCoord::new(0, 1).to_packed(), full_probe(false, true, false, true))
        .unwrap();
    map.mark_visited(0x10).unwrap();

    let walls = map.walls();
    let lower = CellCoord::new(0, 0);
    let upper = CellCoord::new(0, 1);

    // The shared edge was confirmed open from both sides
    assert_eq!(walls.edge(lower, Heading::North), WallState::NoWall);
    assert_eq!(walls.edge(upper, Heading::South), WallState::NoWall);
    assert_eq!(walls.edge(lower, Heading::East), WallState::Wall);
    assert_eq!(walls.edge(upper, Heading::East), WallState::Wall);
    assert!(walls.visited(0, 0));
    assert!(walls.visited(1, 0));
    assert!(!walls.visited(2, 0));

    let counts = walls.count_by_state();
    assert_eq!(counts.visited_cells, 2);
    assert_eq!(counts.corrected(), 0);
    // Borders (16) plus the two interior walls of the corridor
    assert_eq!(counts.wall, 18);
}

#[test]
fn contradictory_reading_is_surfaced_not_overwritten() {
    let mut map = MazeMap::with_dimensions(4, 4).unwrap();
    let cell = CellCoord::new(2, 2);

    map.observe(cell.to_packed(), WallFlags::single(Heading::West, false))
        .unwrap();
    assert_eq!(map.walls().edge(cell, Heading::West), WallState::NoWall);

    // The neighbor disagrees
    let neighbor = CellCoord::new(1, 2);
    let outcome = map
        .observe(neighbor.to_packed(), WallFlags::single(Heading::East, true))
        .unwrap();
    assert_eq!(outcome.edges_corrected, 1);
    assert_eq!(map.walls().edge(cell, Heading::West), WallState::CorrectedWall);

    // Re-confirming the correction keeps the marker
    map.observe(cell.to_packed(), WallFlags::single(Heading::West, true))
        .unwrap();
    assert_eq!(map.walls().edge(cell, Heading::West), WallState::CorrectedWall);
    assert_eq!(map.walls().count_by_state().corrected(), 1);
}

#[test]
fn route_replay_reproduces_mapped_layout() {
    let mut map = MazeMap::with_dimensions(4, 4).unwrap();

    // Map an L-shaped route with a wall on the outside of the turn
    map.observe(0x00, full_probe(false, true, true, true)).unwrap();
    map.observe(0x10, full_probe(true, false, false, true)).unwrap();
    map.observe(0x11, full_probe(true, false, false, false)).unwrap();

    // Overlay drift: a preview pass downgrades some edges
    map.observe_preview(0x10, WallFlags::single(Heading::North, true))
        .unwrap();
    assert_eq!(
        map.walls().edge(CellCoord::new(0, 1), Heading::North),
        WallState::NotMappedWall
    );

    // Replaying the computed route restores confirmed verdicts
    let route = [CellCoord::new(0, 0), CellCoord::new(0, 1), CellCoord::new(1, 1)];
    assert_eq!(map.mark_route(&route).unwrap(), 3);

    let walls = map.walls();
    assert_eq!(walls.edge(CellCoord::new(0, 1), Heading::North), WallState::Wall);
    for cell in route {
        assert!(walls.visited(cell.y as usize, cell.x as usize));
    }
    assert_eq!(walls.count_by_state().visited_cells, 3);
}

#[test]
fn reset_clears_everything_resize_reallocates() {
    let config = MazeConfig { rows: 4, columns: 4 };
    let mut map = MazeMap::new(&config).unwrap();
    let events = map.subscribe();

    map.observe(0x11, full_probe(true, true, true, true)).unwrap();
    map.mark_visited(0x11).unwrap();

    map.reset();
    assert!(events.try_recv().is_err());
    let counts = map.walls().count_by_state();
    assert_eq!(counts.visited_cells, 0);
    assert_eq!(counts.wall, 16, "only border walls survive a reset");

    map.observe(0x11, full_probe(true, true, true, true)).unwrap();
    map.reset_and_notify();
    assert_eq!(events.try_recv().unwrap(), MapEvent::Reset);

    map.resize(6, 3).unwrap();
    assert_eq!(events.try_recv().unwrap(), MapEvent::Resized { rows: 6, columns: 3 });
    assert_eq!(map.walls().horizontal_raw().len(), 7 * 3);

    // Invalid resize fails fast and leaves the model untouched
    assert!(map.resize(0, 3).is_err());
    assert_eq!(map.rows(), 6);
    assert!(events.try_recv().is_err());
}

#[test]
fn out_of_range_observation_is_rejected_atomically() {
    let mut map = MazeMap::with_dimensions(4, 4).unwrap();
    let before = map.walls().count_by_state();

    // (5, 5) decodes fine but the maze is only 4x4
    assert!(map.observe(0x55, WallFlags::all()).is_err());
    assert!(map.mark_visited(0x55).is_err());

    assert_eq!(map.walls().count_by_state(), before);
}

#[test]
fn ascii_dump_reflects_the_model() {
    let mut map = MazeMap::with_dimensions(2, 2).unwrap();
    map.observe(0x00, full_probe(false, true, true, true)).unwrap();
    map.mark_visited(0x00).unwrap();

    let art = map.walls().to_ascii();
    assert!(art.contains('*'), "visited cell missing from dump:\n{}", art);
    assert!(art.contains('|'), "confirmed wall missing from dump:\n{}", art);
}
