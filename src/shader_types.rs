use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};

use crate::mesh::Vertex;

/// Single precision vertex laid out for a WGSL storage buffer, where `vec3`
/// fields are padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, Default, PartialEq)]
pub struct GpuVertex {
    pub pos: Vec3,
    _p0: u32,
    pub normal: Vec3,
    _p1: u32,
}

impl From<Vertex> for GpuVertex {
    fn from(value: Vertex) -> Self {
        Self {
            pos: DVec3::from(value.pos).as_vec3(),
            normal: DVec3::from(value.normal).as_vec3(),
            ..Default::default()
        }
    }
}

impl From<&Vertex> for GpuVertex {
    fn from(value: &Vertex) -> Self {
        Self::from(*value)
    }
}
