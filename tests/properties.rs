use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_abs_diff_eq;
use glam::{DQuat, DVec3};
use mega_vector::{ArrowStyle, TriangleMesh, Vector3, build_arrow_mesh, build_plane_mesh};

const EPS: f64 = 1e-9;

fn samples() -> Vec<Vector3> {
    vec![
        Vector3::X,
        Vector3::new(0.0, -2.0, 0.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 1.0),
        Vector3::new(1e-3, -7.0, 2.5),
        Vector3::new(3.0, 3.0, -3.0),
    ]
}

fn unit_samples() -> Vec<Vector3> {
    let mut normals: Vec<_> = samples().into_iter().map(Vector3::unit).collect();
    normals.extend([
        Vector3::Z,
        -Vector3::Z,
        Vector3::new(1e-7, -1e-7, 1.0).unit(),
        Vector3::new(1e-7, 1e-7, -1.0).unit(),
        Vector3::new(0.3, -0.2, -0.999).unit(),
    ]);
    normals
}

fn assert_vec_eq(a: Vector3, b: Vector3) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = EPS);
    assert_abs_diff_eq!(a.y, b.y, epsilon = EPS);
    assert_abs_diff_eq!(a.z, b.z, epsilon = EPS);
}

#[test]
fn cross_is_anticommutative_and_dot_commutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.cross(b), -b.cross(a));
            assert_eq!(a.dot(b), b.dot(a));
        }
        assert_eq!(a.cross(a), Vector3::ZERO);
    }
}

#[test]
fn unit_has_unit_length() {
    for a in samples() {
        assert_abs_diff_eq!(a.unit().magnitude(), 1.0, epsilon = EPS);
    }
}

#[test]
fn magnitude_of_pythagorean_triple() {
    assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
}

#[test]
fn duff_basis_is_orthonormal() {
    for n in unit_samples() {
        let (b1, b2) = n.duff_basis();

        assert_abs_diff_eq!(b1.dot(b2), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(b1.dot(n), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(b2.dot(n), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(b1.magnitude(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(b2.magnitude(), 1.0, epsilon = EPS);
        assert_vec_eq(b1.cross(b2), n);
    }
}

#[test]
fn orthogonal_constructions_are_perpendicular() {
    for a in samples() {
        let stark = a.orthogonal_stark();
        let xna = a.orthogonal_xna();

        assert!(stark.magnitude() > 0.0);
        assert_abs_diff_eq!(stark.dot(a) / (stark.magnitude() * a.magnitude()), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(xna.dot(a), 0.0, epsilon = EPS);
    }
}

#[test]
fn rotation_round_trips() {
    for axis in unit_samples() {
        for v in samples() {
            for angle in [0.3, FRAC_PI_2, 2.0, -1.1] {
                assert_vec_eq(v.rotate_about(axis, angle).rotate_about(axis, -angle), v);
            }
            assert_vec_eq(v.rotate_about(axis, TAU), v);
            assert_abs_diff_eq!(
                v.rotate_about(axis, 0.7).magnitude(),
                v.magnitude(),
                epsilon = EPS
            );
        }
    }
}

#[test]
fn rotation_follows_right_hand_rule() {
    assert_vec_eq(Vector3::X.rotate_about(Vector3::Z, FRAC_PI_2), Vector3::Y);

    for axis in unit_samples() {
        for v in samples() {
            let expected = DQuat::from_axis_angle(DVec3::from(axis), 1.3) * DVec3::from(v);
            assert_vec_eq(v.rotate_about(axis, 1.3), Vector3::from(expected));
        }
    }
}

#[test]
fn projection_lands_in_plane() {
    for n in unit_samples() {
        for v in samples() {
            let projected = v.project_onto(n);
            assert_abs_diff_eq!(projected.dot(n), 0.0, epsilon = EPS);
            assert_vec_eq(projected.project_onto(n), projected);
        }
    }
}

/// Six times the signed volume enclosed by a closed mesh; positive when the
/// triangles face outwards.
fn signed_volume_x6(mesh: &TriangleMesh) -> f64 {
    mesh.triangles
        .iter()
        .map(|t| {
            let [a, b, c] = t.map(|i| mesh.points[i as usize]);
            a.dot(b.cross(c))
        })
        .sum()
}

fn assert_well_formed(mesh: &TriangleMesh) {
    let count = mesh.point_count() as u32;
    for &[a, b, c] in &mesh.triangles {
        assert!(a < count && b < count && c < count);
        assert!(a != b && b != c && a != c, "degenerate triangle {a} {b} {c}");
    }
    for i in 0..mesh.triangle_count() {
        assert!(mesh.face_normal(i).magnitude() > 0.0);
    }
}

#[test]
fn arrow_mesh_counts() {
    let mesh = build_arrow_mesh(Vector3::Z, Vector3::ZERO, &ArrowStyle::default());

    assert_eq!(mesh.point_count(), 16);
    assert_eq!(mesh.triangle_count(), 25);
    assert_well_formed(&mesh);

    for resolution in [3, 4, 9, 32] {
        let style = ArrowStyle::default().with_resolution(resolution);
        let mesh = build_arrow_mesh(Vector3::Z, Vector3::ZERO, &style);

        assert_eq!(mesh.point_count(), 3 * resolution + 1);
        assert_eq!(mesh.triangle_count(), 5 * resolution);
        assert_well_formed(&mesh);
    }
}

#[test]
fn arrow_mesh_is_deterministic() {
    let style = ArrowStyle::default();
    let tip = Vector3::new(0.2, -1.0, 0.4);
    assert_eq!(
        build_arrow_mesh(tip, Vector3::ZERO, &style),
        build_arrow_mesh(tip, Vector3::ZERO, &style)
    );
}

#[test]
fn capped_arrow_is_watertight_and_faces_out() {
    for tip in [Vector3::Z, -Vector3::Z, Vector3::new(1.0, 2.0, -0.5)] {
        let base = Vector3::new(0.5, 0.0, 0.0);
        let style = ArrowStyle::default().with_resolution(16).with_cap_base(true);
        let mesh = build_arrow_mesh(tip + base, base, &style);

        assert_well_formed(&mesh);
        assert!(mesh.boundary_edges().is_empty());
        assert!(mesh.is_consistently_wound());
        assert!(signed_volume_x6(&mesh) > 0.0);
    }
}

#[test]
fn arrow_side_walls_face_away_from_axis() {
    let tip = Vector3::new(0.0, 3.0, 0.0);
    let mesh = build_arrow_mesh(tip, Vector3::ZERO, &ArrowStyle::default().with_resolution(12));

    // shaft triangles come first, two per segment
    for i in 0..24 {
        let [a, b, c] = mesh.triangles[i].map(|j| mesh.points[j as usize]);
        let centroid = (a + b + c) / 3.0;
        let radial = centroid.project_onto(Vector3::Y);
        assert!(mesh.face_normal(i).dot(radial) > 0.0);
    }
}

#[test]
fn plane_mesh_facing_z() {
    let mesh = build_plane_mesh(Vector3::Z, Vector3::ZERO, 1.0);

    assert_eq!(mesh.point_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_well_formed(&mesh);
    for p in &mesh.points {
        assert_abs_diff_eq!(p.z, 0.0, epsilon = EPS);
    }
    for i in 0..2 {
        let face = mesh.face_normal(i).unit();
        assert_abs_diff_eq!(face.dot(Vector3::Z), 1.0, epsilon = EPS);
    }
}

#[test]
fn plane_mesh_for_any_normal() {
    for n in unit_samples() {
        let mesh = build_plane_mesh(n, Vector3::new(1.0, 2.0, 3.0), 0.5);
        for i in 0..2 {
            assert_abs_diff_eq!(mesh.face_normal(i).unit().dot(n), 1.0, epsilon = EPS);
        }
    }
}
