use log::debug;

use crate::{mesh::TriangleMesh, transform::Frame, vector3::Vector3};

/// A `size` by `size` square centred on `base`, facing along `unit_normal`.
///
/// Both triangles wind counter-clockwise around `unit_normal`.
pub fn build_plane_mesh(unit_normal: Vector3, base: Vector3, size: f64) -> TriangleMesh {
    let frame = Frame::from_unit_normal(base, unit_normal);
    let half = 0.5 * size;

    let points = [(-half, -half), (half, -half), (half, half), (-half, half)]
        .into_iter()
        .map(|(u, v)| frame.to_world(Vector3::new(u, v, 0.0)))
        .collect();

    debug!("built plane at {base} facing {unit_normal}, size {size}");

    TriangleMesh {
        points,
        triangles: vec![[0, 1, 2], [0, 2, 3]],
    }
}
