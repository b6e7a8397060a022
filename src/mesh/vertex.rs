use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh store.
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
///
/// Vertices are immutable once inserted; the store hands out shared
/// references only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Returns `true` if the vertex lies strictly above the ground plane.
    #[must_use]
    pub fn is_above_ground(&self) -> bool {
        self.point.z > 0.0
    }
}
