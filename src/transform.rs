use std::f64::consts::TAU;

use glam::{DMat3, DMat4};

use crate::vector3::Vector3;

/// An origin plus a right-handed orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Vector3,
    pub x_axis: Vector3,
    pub y_axis: Vector3,
    pub z_axis: Vector3,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            origin: Vector3::ZERO,
            x_axis: Vector3::X,
            y_axis: Vector3::Y,
            z_axis: Vector3::Z,
        }
    }
}

impl Frame {
    /// Builds a frame whose z axis is `unit_normal`, completing it with
    /// [`Vector3::duff_basis`].
    pub fn from_unit_normal(origin: Vector3, unit_normal: Vector3) -> Self {
        let (x_axis, y_axis) = unit_normal.duff_basis();
        Self {
            origin,
            x_axis,
            y_axis,
            z_axis: unit_normal,
        }
    }

    /// Maps local coordinates into the space the frame is expressed in.
    pub fn to_world(&self, local: Vector3) -> Vector3 {
        self.origin
            + self.x_axis * local.x
            + self.y_axis * local.y
            + self.z_axis * local.z
    }

    /// `resolution` points evenly spaced on a circle of `radius` around
    /// `center`, lying in the frame's xy plane. The first point sits on the
    /// x axis and the angle grows counter-clockwise about the z axis; the
    /// closing point at `TAU` is not repeated.
    pub fn circle(
        &self,
        center: Vector3,
        radius: f64,
        resolution: usize,
    ) -> impl Iterator<Item = Vector3> + '_ {
        (0..resolution).map(move |i| {
            let angle = TAU * i as f64 / resolution as f64;
            let (sin, cos) = angle.sin_cos();
            center + (self.x_axis * cos + self.y_axis * sin) * radius
        })
    }
}

impl From<Frame> for DMat3 {
    fn from(value: Frame) -> Self {
        Self::from_cols(
            value.x_axis.into(),
            value.y_axis.into(),
            value.z_axis.into(),
        )
    }
}

impl From<Frame> for DMat4 {
    fn from(value: Frame) -> Self {
        Self::from_cols(
            glam::DVec3::from(value.x_axis).extend(0.0),
            glam::DVec3::from(value.y_axis).extend(0.0),
            glam::DVec3::from(value.z_axis).extend(0.0),
            glam::DVec3::from(value.origin).extend(1.0),
        )
    }
}

impl From<&Frame> for DMat4 {
    fn from(value: &Frame) -> Self {
        Self::from(*value)
    }
}
