//! Arrow meshes for drawing vectors.
//!
//! An arrow is four rings of points around the arrow's axis plus the apex:
//!
//! ```text
//! ring 0  base    at `base`,                     radius = shaft_radius
//! ring 1  neck    at `tip - axis * head_length`, radius = shaft_radius
//! ring 2  flange  at `tip - axis * head_length`, radius = head_radius
//! apex            at `tip`
//! ```
//!
//! Neighbouring rings are stitched with two triangles per segment and the
//! flange closes onto the apex with a fan.

use log::{debug, warn};

use crate::{error::VectorError, mesh::TriangleMesh, transform::Frame, vector3::Vector3};

/// Shape parameters for [`build_arrow_mesh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    pub shaft_radius: f64,
    /// Head radius relative to `shaft_radius`.
    pub head_scale: f64,
    pub head_length: f64,
    /// Points per ring.
    pub resolution: usize,
    /// Close the base ring with a triangle fan.
    pub cap_base: bool,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            shaft_radius: 0.02,
            head_scale: 3.0,
            head_length: 0.2,
            resolution: 5,
            cap_base: false,
        }
    }
}

impl ArrowStyle {
    pub fn head_radius(&self) -> f64 {
        self.shaft_radius * self.head_scale
    }

    pub fn with_shaft_radius(self, shaft_radius: f64) -> Self {
        Self {
            shaft_radius,
            ..self
        }
    }

    pub fn with_head_scale(self, head_scale: f64) -> Self {
        Self { head_scale, ..self }
    }

    pub fn with_head_length(self, head_length: f64) -> Self {
        Self {
            head_length,
            ..self
        }
    }

    pub fn with_resolution(self, resolution: usize) -> Self {
        Self { resolution, ..self }
    }

    pub fn with_cap_base(self, cap_base: bool) -> Self {
        Self { cap_base, ..self }
    }

    /// Number of points [`build_arrow_mesh`] emits for this style.
    pub fn point_count(&self) -> usize {
        3 * self.resolution + 1
    }

    /// Number of triangles [`build_arrow_mesh`] emits for this style.
    pub fn triangle_count(&self) -> usize {
        let cap = if self.cap_base {
            self.resolution.saturating_sub(2)
        } else {
            0
        };
        5 * self.resolution + cap
    }
}

/// Builds an arrow from `base` to `tip`.
///
/// `tip == base` is not checked and yields NaN points; see
/// [`try_build_arrow_mesh`] for the checked variant.
pub fn build_arrow_mesh(tip: Vector3, base: Vector3, style: &ArrowStyle) -> TriangleMesh {
    let resolution = style.resolution;
    if resolution < 3 {
        warn!("arrow resolution {resolution} produces degenerate triangles");
    }

    let axis = (tip - base).unit();
    let frame = Frame::from_unit_normal(base, axis);
    let neck = tip - axis * style.head_length;

    let mut points = Vec::with_capacity(style.point_count());
    points.extend(frame.circle(base, style.shaft_radius, resolution));
    points.extend(frame.circle(neck, style.shaft_radius, resolution));
    points.extend(frame.circle(neck, style.head_radius(), resolution));
    points.push(tip);

    let ring = |n: u32| n * resolution as u32;
    let apex = ring(3);

    let mut triangles = Vec::with_capacity(style.triangle_count());
    stitch_rings(ring(0), ring(1), resolution as u32, &mut triangles);
    stitch_rings(ring(1), ring(2), resolution as u32, &mut triangles);
    fan_to_point(ring(2), apex, resolution as u32, &mut triangles);
    if style.cap_base {
        cap_ring(ring(0), resolution as u32, &mut triangles);
    }

    debug!(
        "built arrow {base} -> {tip}: {} points, {} triangles",
        points.len(),
        triangles.len()
    );

    TriangleMesh { points, triangles }
}

/// Like [`build_arrow_mesh`], but rejects a zero length arrow and rings with
/// fewer than three points.
pub fn try_build_arrow_mesh(
    tip: Vector3,
    base: Vector3,
    style: &ArrowStyle,
) -> Result<TriangleMesh, VectorError> {
    if style.resolution < 3 {
        return Err(VectorError::Resolution(style.resolution));
    }
    (tip - base)
        .try_unit()
        .map_err(|_| VectorError::Degenerate("arrow tip coincides with its base"))?;

    Ok(build_arrow_mesh(tip, base, style))
}

/// Joins ring `lower` to ring `upper` (the next ring along the surface) with
/// two triangles per segment, wrapping around at the end of the ring.
fn stitch_rings(lower: u32, upper: u32, resolution: u32, triangles: &mut Vec<[u32; 3]>) {
    for i in 0..resolution {
        let next = (i + 1) % resolution;
        triangles.push([lower + i, lower + next, upper + i]);
        triangles.push([lower + next, upper + next, upper + i]);
    }
}

fn fan_to_point(ring: u32, apex: u32, resolution: u32, triangles: &mut Vec<[u32; 3]>) {
    for i in 0..resolution {
        triangles.push([ring + i, ring + (i + 1) % resolution, apex]);
    }
}

/// Closes a ring facing against the direction it winds around.
fn cap_ring(ring: u32, resolution: u32, triangles: &mut Vec<[u32; 3]>) {
    for i in 1..resolution.saturating_sub(1) {
        triangles.push([ring, ring + i + 1, ring + i]);
    }
}
