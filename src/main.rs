use std::f64::consts::FRAC_PI_4;

use log::info;
use mega_vector::{
    ArrowStyle, Vector3, VectorError, build_plane_mesh, try_build_arrow_mesh, vector_lines,
};

fn main() -> Result<(), VectorError> {
    env_logger::init();

    let style = ArrowStyle::default().with_resolution(8).with_cap_base(true);

    let tilted = Vector3::X.rotate_about(Vector3::new(1.0, 1.0, 1.0).unit(), FRAC_PI_4);
    let vectors = [Vector3::X, Vector3::Y, Vector3::Z, tilted];

    for tip in vectors {
        let mesh = try_build_arrow_mesh(tip, Vector3::ZERO, &style)?;
        let (vertices, indices) = mesh.gpu_buffers();
        info!(
            "arrow to {tip}: {} points, {} triangles, {} buffer bytes, closed: {}",
            mesh.point_count(),
            mesh.triangle_count(),
            bytemuck::cast_slice::<_, u8>(vertices.as_slice()).len() + indices.len() * 4,
            mesh.boundary_edges().is_empty()
        );
    }

    let plane = build_plane_mesh(tilted.unit(), Vector3::ZERO, 1.0);
    info!("plane facing {tilted:.3}: {:?}", plane.points);

    let trace = vector_lines(&vectors);
    info!("line trace has {} rows", trace.len());

    Ok(())
}
