//! A small `f64` 3D vector type plus the geometry built on it: orthonormal
//! bases, projection and rotation, and arrow/plane meshes for visualising
//! vectors with a mesh renderer or plotting library.
//!
//! ```
//! use mega_vector::{ArrowStyle, Vector3, build_arrow_mesh};
//!
//! let mesh = build_arrow_mesh(Vector3::new(0.0, 0.0, 1.0), Vector3::ZERO, &ArrowStyle::default());
//! assert_eq!(mesh.point_count(), 16);
//! assert_eq!(mesh.triangle_count(), 25);
//! ```

mod arrow;
mod error;
mod mesh;
mod plane;
mod shader_types;
mod trace;
mod transform;
mod vector3;

pub use arrow::{ArrowStyle, build_arrow_mesh, try_build_arrow_mesh};
pub use error::VectorError;
pub use mesh::{TriangleMesh, Vertex};
pub use plane::build_plane_mesh;
pub use shader_types::GpuVertex;
pub use trace::{LineTrace, vector_lines};
pub use transform::Frame;
pub use vector3::Vector3;
