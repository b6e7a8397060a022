use crate::mesh::MeshStore;

/// Size summary of a mesh store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Triangles in the working set.
    pub triangles: usize,
    /// Vertices allocated since the last clear, referenced or not.
    pub vertices: usize,
    /// Edges held by the midpoint cache.
    pub cached_edges: usize,
    /// Highest z among working-set vertices, or 0 for an empty mesh.
    pub max_height: f64,
}

/// Collects [`MeshStats`] for a mesh store.
#[derive(Default)]
pub struct Stats;

impl Stats {
    /// Creates a new `Stats` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, store: &MeshStore) -> MeshStats {
        let max_height = store
            .triangles()
            .iter()
            .flat_map(|t| t.corners())
            .map(|id| store.point(id).z)
            .fold(0.0, f64::max);

        MeshStats {
            triangles: store.triangle_count(),
            vertices: store.vertex_count(),
            cached_edges: store.edge_cache().len(),
            max_height,
        }
    }
}
