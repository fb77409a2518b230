//! Topological and geometric checks over the whole catalog.
//!
//! Run with: cargo test -p mesh-solids --test topology

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use hashbrown::HashMap;
use mesh_solids::{IndexedMesh, Solid, cube, dodecahedron, icosahedron, octahedron, tetrahedron};
use mesh_types::{MeshBounds, MeshTopology, Point3, Triangle};

// =============================================================================
// Helpers
// =============================================================================

/// Undirected edge (v0 < v1) to the faces that use it.
fn edge_faces(faces: &[[u32; 3]]) -> HashMap<(u32, u32), Vec<usize>> {
    let mut map: HashMap<(u32, u32), Vec<usize>> = HashMap::new();
    for (face_idx, face) in faces.iter().enumerate() {
        for i in 0..3 {
            let (a, b) = (face[i], face[(i + 1) % 3]);
            map.entry((a.min(b), a.max(b))).or_default().push(face_idx);
        }
    }
    map
}

/// Directed edge to the number of faces that traverse it in that direction.
fn directed_edges(faces: &[[u32; 3]]) -> HashMap<(u32, u32), usize> {
    let mut map = HashMap::new();
    for face in faces {
        for i in 0..3 {
            *map.entry((face[i], face[(i + 1) % 3])).or_insert(0) += 1;
        }
    }
    map
}

fn corners(solid: Solid, polygon: &[u32]) -> Vec<Point3<f64>> {
    polygon
        .iter()
        .map(|&i| Point3::from(solid.vertices()[i as usize]))
        .collect()
}

fn euler_characteristic(vertices: usize, edges: usize, faces: usize) -> i64 {
    i64::try_from(vertices).unwrap() - i64::try_from(edges).unwrap()
        + i64::try_from(faces).unwrap()
}

// =============================================================================
// Counts
// =============================================================================

#[test]
fn canonical_counts() {
    let cases: [(IndexedMesh, usize, usize); 5] = [
        (tetrahedron(), 4, 4),
        (octahedron(), 6, 8),
        (cube(), 8, 12),
        (icosahedron(), 12, 20),
        (dodecahedron(), 20, 36),
    ];
    for (mesh, vertices, faces) in cases {
        assert_eq!(mesh.vertex_count(), vertices);
        assert_eq!(mesh.face_count(), faces);
    }
}

#[test]
fn indices_in_range() {
    for solid in Solid::ALL {
        let mesh = solid.mesh();
        assert_eq!(mesh.first_invalid_index(), None, "{solid}");
        let n = u32::try_from(mesh.vertex_count()).unwrap();
        assert!(mesh.faces().flatten().all(|i| i < n), "{solid}");
    }
}

#[test]
fn every_vertex_is_used() {
    for solid in Solid::ALL {
        let mesh = solid.mesh();
        let mut used = vec![false; mesh.vertex_count()];
        for i in mesh.faces().flatten() {
            used[i as usize] = true;
        }
        assert!(used.iter().all(|&u| u), "{solid} has an unreferenced vertex");
    }
}

// =============================================================================
// Topology
// =============================================================================

#[test]
fn closed_two_manifold() {
    for solid in Solid::ALL {
        let edges = edge_faces(solid.faces());
        for (edge, faces) in &edges {
            assert_eq!(faces.len(), 2, "{solid}: edge {edge:?} used by {faces:?}");
        }
    }
}

#[test]
fn consistent_winding() {
    // Each directed edge must appear once; its reverse belongs to the
    // neighbouring face.
    for solid in Solid::ALL {
        let directed = directed_edges(solid.faces());
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "{solid}: edge ({a}, {b}) traversed {count} times");
            assert_eq!(directed.get(&(b, a)), Some(&1), "{solid}: ({b}, {a}) missing");
        }
    }
}

#[test]
fn euler_formula_on_triangles() {
    let expected_edges = [6, 12, 18, 30, 54];
    for (solid, expected) in Solid::ALL.into_iter().zip(expected_edges) {
        let mesh = solid.mesh();
        let edges = edge_faces(&mesh.faces).len();
        assert_eq!(edges, expected, "{solid}");
        assert_eq!(
            euler_characteristic(mesh.vertex_count(), edges, mesh.face_count()),
            2,
            "{solid}"
        );
    }
}

#[test]
fn euler_formula_on_regular_faces() {
    for solid in Solid::ALL {
        let polygons = solid.polygons();
        assert_eq!(polygons.len(), solid.polygon_count());
        assert_eq!(
            euler_characteristic(solid.vertices().len(), solid.edge_count(), polygons.len()),
            2,
            "{solid}"
        );
    }
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn outward_orientation() {
    let origin = Point3::origin();
    for solid in Solid::ALL {
        let mesh = solid.mesh();
        assert!(mesh.signed_volume() > 0.0, "{solid} is inside-out");
        for (i, tri) in mesh.triangles().enumerate() {
            assert!(tri.faces_away_from(&origin), "{solid}: face {i} points inward");
        }
    }
}

#[test]
fn known_volumes() {
    let sqrt5 = 5.0_f64.sqrt();
    // Edge lengths: tetrahedron 2√2, octahedron √2, cube 2, icosahedron 2,
    // dodecahedron 2/φ.
    let expected = [
        8.0 / 3.0,
        4.0 / 3.0,
        8.0,
        5.0 / 12.0 * (3.0 + sqrt5) * 8.0,
        (15.0 + 7.0 * sqrt5) / 4.0 * (2.0 * mesh_solids::INV_PHI).powi(3),
    ];
    for (solid, volume) in Solid::ALL.into_iter().zip(expected) {
        assert_relative_eq!(solid.mesh().signed_volume(), volume, epsilon = 1e-9);
    }
}

#[test]
fn polygons_are_planar_and_regular() {
    for solid in Solid::ALL {
        let sides = solid.polygon_sides();
        for polygon in solid.polygons() {
            assert_eq!(polygon.len(), sides, "{solid}: {polygon:?}");
            let corners = corners(solid, &polygon);
            let normal = Triangle::new(corners[0], corners[1], corners[2])
                .normal()
                .unwrap();

            for c in &corners[3..] {
                assert_relative_eq!(normal.dot(&(c - corners[0])), 0.0, epsilon = 1e-9);
            }
            assert!(
                normal.dot(&corners[0].coords) > 0.0,
                "{solid}: {polygon:?} faces inward"
            );

            // Convex and untwisted: every corner turns the same way.
            for i in 0..sides {
                let (a, b, c) = (corners[i], corners[(i + 1) % sides], corners[(i + 2) % sides]);
                assert!(
                    (b - a).cross(&(c - b)).dot(&normal) > 0.0,
                    "{solid}: {polygon:?} is twisted at corner {}",
                    polygon[(i + 1) % sides]
                );
            }

            let first = (corners[1] - corners[0]).norm();
            for i in 0..sides {
                let len = (corners[(i + 1) % sides] - corners[i]).norm();
                assert_relative_eq!(len, first, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn polygons_cover_every_triangle() {
    for solid in Solid::ALL {
        let polygons = solid.polygons();
        let fan_triangles: usize = polygons.iter().map(|p| p.len() - 2).sum();
        assert_eq!(fan_triangles, solid.faces().len(), "{solid}");

        for tri in solid.faces() {
            let owners = polygons
                .iter()
                .filter(|p| tri.iter().all(|i| p.contains(i)))
                .count();
            assert_eq!(owners, 1, "{solid}: triangle {tri:?}");
        }
    }
}

#[test]
fn cube_quads_are_the_six_sides() {
    let vertices = Solid::Cube.vertices();
    let mut sides = Vec::new();
    for quad in Solid::Cube.polygons() {
        let mut distinct = quad.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 4, "{quad:?}");

        let corners: Vec<[f64; 3]> = quad.iter().map(|&i| vertices[i as usize]).collect();
        let fixed: Vec<(usize, bool)> = (0..3)
            .filter(|&axis| corners.iter().all(|c| c[axis] == corners[0][axis]))
            .map(|axis| (axis, corners[0][axis] > 0.0))
            .collect();
        assert_eq!(fixed.len(), 1, "{quad:?} is not an axis-aligned side");
        sides.push(fixed[0]);
    }

    sides.sort_unstable();
    assert_eq!(
        sides,
        [
            (0, false),
            (0, true),
            (1, false),
            (1, true),
            (2, false),
            (2, true)
        ]
    );
}

#[test]
fn dodecahedron_pentagons_are_coplanar() {
    let pentagons = Solid::Dodecahedron.polygons();
    assert_eq!(pentagons.len(), 12);
    for pentagon in &pentagons {
        let corners = corners(Solid::Dodecahedron, pentagon);
        let normal = Triangle::new(corners[0], corners[1], corners[2])
            .normal()
            .unwrap();
        for c in &corners {
            assert_relative_eq!(normal.dot(&(c - corners[0])), 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn bounds_are_centred() {
    for solid in Solid::ALL {
        let center = solid.mesh().center();
        assert_relative_eq!(center.coords.norm(), 0.0, epsilon = 1e-12);
    }
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn generators_are_idempotent() {
    for solid in Solid::ALL {
        let first = solid.mesh();
        let mut second = solid.mesh();
        assert_eq!(first, second);

        // Independently owned: mutating one leaves the other untouched.
        second.flip_normals();
        second.vertices[0].position.x += 1.0;
        assert_ne!(first, second);
        assert_eq!(first, solid.mesh());
    }
}

#[test]
fn generators_run_concurrently() {
    let handles: Vec<_> = Solid::ALL
        .into_iter()
        .map(|solid| std::thread::spawn(move || (solid, solid.mesh())))
        .collect();
    for handle in handles {
        let (solid, mesh) = handle.join().unwrap();
        assert_eq!(mesh.faces, solid.faces());
    }
}
