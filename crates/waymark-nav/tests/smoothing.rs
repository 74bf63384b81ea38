use waymark_nav::{
    cell_to_world_coords, line_of_sight, path_to_world_coords, smooth_path, world_to_grid_coords,
    AStar, Cell, GridMap, Heuristic, Vec2,
};

#[test]
fn straight_runs_collapse_to_endpoints() {
    let grid = GridMap::new(10, 10);
    let path = vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(3, 0),
        Cell::new(4, 0),
    ];

    let smoothed = smooth_path(&path, &grid);
    assert_eq!(smoothed, vec![Cell::new(0, 0), Cell::new(4, 0)]);
}

#[test]
fn obstacles_keep_the_turning_waypoint() {
    let mut grid = GridMap::new(10, 10);
    grid.add_obstacle(1, 1);

    // L-shaped route around the blocked corner.
    let path = vec![
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(2, 1),
        Cell::new(2, 2),
    ];

    let smoothed = smooth_path(&path, &grid);

    assert!(smoothed.len() <= path.len());
    assert_eq!(smoothed.first(), path.first());
    assert_eq!(smoothed.last(), path.last());
    assert!(smoothed.len() >= 3, "cannot shortcut through (1, 1)");
    for w in smoothed.windows(2) {
        assert!(line_of_sight(&grid, w[0], w[1]));
    }
}

#[test]
fn short_paths_pass_through_unchanged() {
    let mut grid = GridMap::new(5, 5);
    grid.add_obstacle(1, 0);

    let two = vec![Cell::new(0, 0), Cell::new(2, 0)];
    assert_eq!(smooth_path(&two, &grid), two);

    let one = vec![Cell::new(0, 0)];
    assert_eq!(smooth_path(&one, &grid), one);

    let empty: Vec<Cell> = Vec::new();
    assert_eq!(smooth_path(&empty, &grid), empty);
}

#[test]
fn smoothed_astar_output_stays_walkable() {
    let mut grid = GridMap::new(12, 12);
    for y in 2..12 {
        grid.add_obstacle(4, y);
    }
    for y in 0..10 {
        grid.add_obstacle(8, y);
    }

    let mut astar = AStar::new(&grid);
    let path = astar
        .find_path(Cell::new(0, 11), Cell::new(11, 11), Heuristic::Octile, true)
        .expect("path should exist");

    let smoothed = smooth_path(&path, &grid);

    assert!(smoothed.len() <= path.len());
    assert_eq!(smoothed.first(), path.first());
    assert_eq!(smoothed.last(), path.last());
    for w in smoothed.windows(2) {
        assert!(
            line_of_sight(&grid, w[0], w[1]),
            "segment crosses an obstacle: {:?} -> {:?}",
            w[0],
            w[1]
        );
    }
}

#[test]
fn line_of_sight_respects_blocked_cells() {
    let mut grid = GridMap::new(10, 10);
    for y in 0..10 {
        grid.add_obstacle(5, y);
    }

    assert!(line_of_sight(&grid, Cell::new(0, 0), Cell::new(4, 0)));
    assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(9, 0)));
    assert!(!line_of_sight(&grid, Cell::new(0, 5), Cell::new(9, 3)));
}

#[test]
fn line_of_sight_rejects_diagonal_squeezes() {
    let mut grid = GridMap::new(4, 4);
    grid.add_obstacle(1, 0);
    grid.add_obstacle(0, 1);

    // The diagonal between the two obstacles is a corner cut.
    assert!(!line_of_sight(&grid, Cell::new(0, 0), Cell::new(1, 1)));
    assert!(line_of_sight(&grid, Cell::new(1, 1), Cell::new(3, 3)));
}

#[test]
fn world_grid_round_trip_is_stable() {
    let cell_size = 2.0;
    let offset = Vec2::new(10.0, -4.0);

    let cell = Cell::new(7, 2);
    let world = cell_to_world_coords(cell, cell_size, offset);
    assert_eq!(world, Vec2::new(25.0, 1.0));
    assert_eq!(world_to_grid_coords(world, cell_size, offset), cell);
}

#[test]
fn world_to_grid_floors_toward_cell_origin() {
    assert_eq!(
        world_to_grid_coords(Vec2::new(5.7, 3.2), 1.0, Vec2::ZERO),
        Cell::new(5, 3)
    );
    assert_eq!(
        world_to_grid_coords(Vec2::new(-0.5, 0.5), 1.0, Vec2::ZERO),
        Cell::new(-1, 0)
    );
}

#[test]
fn paths_map_to_cell_centers() {
    let path = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)];
    let world = path_to_world_coords(&path, 4.0, Vec2::ZERO);

    assert_eq!(
        world,
        vec![
            Vec2::new(2.0, 2.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(6.0, 6.0),
        ]
    );

    // Every converted point maps back to its source cell.
    for (cell, point) in path.iter().zip(&world) {
        assert_eq!(world_to_grid_coords(*point, 4.0, Vec2::ZERO), *cell);
    }
}
