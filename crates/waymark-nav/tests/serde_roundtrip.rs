#![cfg(feature = "serde")]

use waymark_nav::{Cell, NavMesh, NavMeshPathfinder, NavMeshPolygon, Vec2};

fn square(id: u32, x0: f32, y0: f32, size: f32) -> NavMeshPolygon {
    NavMeshPolygon::new(
        id,
        vec![
            Vec2::new(x0, y0),
            Vec2::new(x0 + size, y0),
            Vec2::new(x0 + size, y0 + size),
            Vec2::new(x0, y0 + size),
        ],
    )
    .expect("valid square")
}

#[test]
fn nav_mesh_roundtrips_via_serde() {
    let mut mesh = NavMesh::new();
    mesh.add_polygon(square(1, 0.0, 0.0, 10.0)).expect("unique id");
    mesh.add_polygon(square(2, 10.0, 0.0, 10.0)).expect("unique id");
    mesh.add_polygon(square(3, 20.0, 0.0, 10.0)).expect("unique id");
    mesh.build_connections();

    let json = serde_json::to_string(&mesh).expect("serialize navmesh");
    let mesh2: NavMesh = serde_json::from_str(&json).expect("deserialize navmesh");

    // Connectivity is rebuilt, not persisted.
    assert_eq!(mesh2.polygon_count(), mesh.polygon_count());
    assert_eq!(mesh2.edge_count(), mesh.edge_count());
    for id in 1..=3 {
        assert_eq!(
            mesh.get_neighbors(id).cloned(),
            mesh2.get_neighbors(id).cloned()
        );
    }

    let start = Vec2::new(5.0, 5.0);
    let goal = Vec2::new(25.0, 5.0);
    let path1 = NavMeshPathfinder::new(&mesh)
        .find_path(start, goal)
        .expect("path");
    let path2 = NavMeshPathfinder::new(&mesh2)
        .find_path(start, goal)
        .expect("path");
    assert_eq!(path1, path2);
}

#[test]
fn value_types_roundtrip_via_serde() {
    let cell = Cell::new(-3, 17);
    let json = serde_json::to_string(&cell).expect("serialize cell");
    assert_eq!(serde_json::from_str::<Cell>(&json).expect("deserialize cell"), cell);

    let point = Vec2::new(1.5, -2.25);
    let json = serde_json::to_string(&point).expect("serialize point");
    assert_eq!(serde_json::from_str::<Vec2>(&json).expect("deserialize point"), point);
}
