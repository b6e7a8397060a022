mod export_mesh;
mod shaded;

pub use export_mesh::ExportMesh;
pub use shaded::{shade_for_height, ShadedTriangle, TriangleSink};

use crate::math::{Point3, Vector3};

/// An indexed triangle mesh with shared vertices.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Unit vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

