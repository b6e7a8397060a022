use std::collections::HashMap;

use crate::math::triangle_3d::face_normal;
use crate::math::{Vector3, TOLERANCE};
use crate::mesh::{MeshStore, VertexId};

use super::TriangleMesh;

/// Exports the working set as an indexed [`TriangleMesh`].
///
/// Corners shared by identity become a single mesh vertex. Each vertex
/// normal is the normalized sum of the unnormalized normals of its incident
/// faces, so larger faces weigh more.
#[derive(Default)]
pub struct ExportMesh;

impl ExportMesh {
    /// Creates a new `ExportMesh` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the export.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, store: &MeshStore) -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        let mut index_of: HashMap<VertexId, u32> = HashMap::new();

        for tri in store.triangles() {
            let idx = tri.corners().map(|id| {
                *index_of.entry(id).or_insert_with(|| {
                    mesh.vertices.push(store.point(id));
                    mesh.normals.push(Vector3::zeros());
                    (mesh.vertices.len() - 1) as u32
                })
            });

            let [a, b, c] = idx.map(|i| mesh.vertices[i as usize]);
            let n = face_normal(&a, &b, &c);
            for i in idx {
                mesh.normals[i as usize] += n;
            }
            mesh.indices.push(idx);
        }

        for n in &mut mesh.normals {
            *n = n.try_normalize(TOLERANCE).unwrap_or_else(Vector3::z);
        }

        mesh
    }
}
