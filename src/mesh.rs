use std::collections::HashMap;

use crate::{shader_types::GpuVertex, vector3::Vector3};

/// Point and triangle buffers handed to a rendering or plotting backend.
///
/// Triangles index into `points` and are wound counter-clockwise when seen
/// from outside the surface.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TriangleMesh {
    pub points: Vec<Vector3>,
    pub triangles: Vec<[u32; 3]>,
}

/// A mesh point together with its smoothed normal.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Vector3,
    pub normal: Vector3,
}

impl TriangleMesh {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Points as a flat `x, y, z, x, y, z, ...` buffer.
    pub fn coordinates(&self) -> &[f64] {
        bytemuck::cast_slice(&self.points)
    }

    /// Triangles as a flat index buffer, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Point coordinates split into x, y and z columns.
    pub fn xyz(&self) -> [Vec<f64>; 3] {
        [
            self.points.iter().map(|p| p.x).collect(),
            self.points.iter().map(|p| p.y).collect(),
            self.points.iter().map(|p| p.z).collect(),
        ]
    }

    /// Triangle corners split into i, j and k columns.
    pub fn ijk(&self) -> [Vec<u32>; 3] {
        [
            self.triangles.iter().map(|t| t[0]).collect(),
            self.triangles.iter().map(|t| t[1]).collect(),
            self.triangles.iter().map(|t| t[2]).collect(),
        ]
    }

    fn corners(&self, triangle: [u32; 3]) -> [Vector3; 3] {
        triangle.map(|i| self.points[i as usize])
    }

    /// Unnormalized normal of triangle `index`; its length is twice the
    /// triangle's area.
    ///
    /// Panics if `index` or one of the triangle's indices is out of range.
    pub fn face_normal(&self, index: usize) -> Vector3 {
        let [a, b, c] = self.corners(self.triangles[index]);
        (b - a).cross(c - a)
    }

    /// Points paired with area-weighted vertex normals. Points not used by any
    /// triangle get a zero normal.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut normals = vec![Vector3::ZERO; self.points.len()];
        for (index, triangle) in self.triangles.iter().enumerate() {
            let normal = self.face_normal(index);
            for &i in triangle {
                normals[i as usize] = normals[i as usize] + normal;
            }
        }

        self.points
            .iter()
            .zip(normals)
            .map(|(&pos, normal)| Vertex {
                pos,
                normal: normal.try_unit().unwrap_or(Vector3::ZERO),
            })
            .collect()
    }

    /// Vertex and index buffers ready for `bytemuck::cast_slice`.
    pub fn gpu_buffers(&self) -> (Vec<GpuVertex>, Vec<u32>) {
        (
            self.vertices().iter().map(GpuVertex::from).collect(),
            self.indices().to_vec(),
        )
    }

    /// Directed edges, each mapped to how many triangles use it.
    fn directed_edges(&self) -> HashMap<(u32, u32), usize> {
        let mut edges = HashMap::new();
        for &[a, b, c] in &self.triangles {
            for edge in [(a, b), (b, c), (c, a)] {
                *edges.entry(edge).or_insert(0) += 1;
            }
        }
        edges
    }

    /// Edges used by exactly one triangle, in the direction that triangle
    /// traverses them. Empty for a closed surface.
    pub fn boundary_edges(&self) -> Vec<(u32, u32)> {
        let edges = self.directed_edges();
        let mut boundary: Vec<_> = edges
            .keys()
            .filter(|&&(a, b)| !edges.contains_key(&(b, a)))
            .copied()
            .collect();
        boundary.sort_unstable();
        boundary
    }

    /// True when no directed edge is used twice, i.e. every pair of
    /// neighbouring triangles traverses their shared edge in opposite
    /// directions.
    pub fn is_consistently_wound(&self) -> bool {
        self.directed_edges().values().all(|&count| count == 1)
    }
}
