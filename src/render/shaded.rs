use crate::math::triangle_3d::face_normal;
use crate::math::{Point3, Vector3};
use crate::mesh::{MeshStore, Triangle};

/// Gray level of a ground-level face.
const SHADE_BASE: f64 = 0.2;

/// Height over which the gray level rises by one full unit.
const SHADE_HEIGHT_SCALE: f64 = 80.0;

/// Gray-scale hint for a face whose reference vertex sits at height `z`.
///
/// Rises linearly from 0.2 at the ground and saturates at 1.0.
#[must_use]
pub fn shade_for_height(z: f64) -> f64 {
    (SHADE_BASE + z / SHADE_HEIGHT_SCALE).clamp(0.0, 1.0)
}

/// A working-set triangle resolved to positions, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedTriangle {
    /// Corner positions in winding order.
    pub points: [Point3; 3],
    /// Unnormalized face normal `(p2 - p1) × (p3 - p1)`.
    pub normal: Vector3,
    /// Gray level in `[0, 1]`, taken from the second corner's height.
    pub shade: f64,
}

impl ShadedTriangle {
    /// Resolves a triangle against the store that owns its corners.
    #[must_use]
    pub(crate) fn resolve(store: &MeshStore, triangle: &Triangle) -> Self {
        let points = triangle.corners().map(|id| store.point(id));
        let [p1, p2, p3] = &points;
        Self {
            normal: face_normal(p1, p2, p3),
            shade: shade_for_height(p2.z),
            points,
        }
    }
}

/// Receives the terrain's triangles one by one, in working-set order.
///
/// This is the seam to a renderer: an immediate-mode backend would emit one
/// normal, color and three vertices per call.
pub trait TriangleSink {
    /// Consumes one triangle.
    fn triangle(&mut self, triangle: &ShadedTriangle);
}

impl<F: FnMut(&ShadedTriangle)> TriangleSink for F {
    fn triangle(&mut self, triangle: &ShadedTriangle) {
        self(triangle);
    }
}
