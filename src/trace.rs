use crate::vector3::Vector3;

/// Polyline columns for a line plot: segments separated by gap markers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl LineTrace {
    fn push(&mut self, [x, y, z]: [f64; 3]) {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Gap between segments; plotting backends break the line at NaN.
const GAP: [f64; 3] = [0.0, f64::NAN, f64::NAN];

/// Draws every vector as a segment from the origin to its tip.
///
/// Each vector contributes three rows: origin, tip, gap.
pub fn vector_lines(vectors: &[Vector3]) -> LineTrace {
    let mut trace = LineTrace {
        x: Vec::with_capacity(vectors.len() * 3),
        y: Vec::with_capacity(vectors.len() * 3),
        z: Vec::with_capacity(vectors.len() * 3),
    };
    for vector in vectors {
        trace.push(Vector3::ZERO.to_array());
        trace.push(vector.to_array());
        trace.push(GAP);
    }
    trace
}
