pub mod edge_cache;
pub mod triangle;
pub mod vertex;

pub use edge_cache::{EdgeKey, EdgeMidpointCache};
pub use triangle::Triangle;
pub use vertex::{VertexData, VertexId};

use crate::error::MeshError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns the terrain mesh.
///
/// Holds every vertex allocated since the last [`MeshStore::clear`], the
/// ordered working set of triangles, and the edge midpoint cache. Triangles
/// reference vertices via typed IDs (generational indices), so two triangles
/// share a vertex by identity rather than by value.
#[derive(Debug, Default)]
pub struct MeshStore {
    vertices: SlotMap<VertexId, VertexData>,
    triangles: Vec<Triangle>,
    edges: EdgeMidpointCache,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// IDs handed out before the last [`MeshStore::clear`] are not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, MeshError> {
        self.vertices.get(id).ok_or(MeshError::VertexNotFound)
    }

    /// Position of a vertex allocated by this store since the last clear.
    #[must_use]
    pub(crate) fn point(&self, id: VertexId) -> Point3 {
        self.vertices[id].point
    }

    /// Number of vertices allocated since the last clear.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Triangle operations ---

    /// Appends a triangle over existing vertices to the working set.
    ///
    /// The triangle is kept only if at least one corner lies strictly above
    /// the ground plane. Returns whether it was kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner is not in the store, including IDs handed
    /// out before the last [`MeshStore::clear`].
    pub fn add_triangle(
        &mut self,
        p1: VertexId,
        p2: VertexId,
        p3: VertexId,
    ) -> Result<bool, MeshError> {
        let mut visible = false;
        for id in [p1, p2, p3] {
            visible |= self.vertex(id)?.is_above_ground();
        }
        if visible {
            self.triangles.push(Triangle::new(p1, p2, p3));
        }
        Ok(visible)
    }

    /// Ground-filtered append for corners this store just allocated.
    pub(crate) fn push_triangle(&mut self, p1: VertexId, p2: VertexId, p3: VertexId) -> bool {
        let visible = [p1, p2, p3]
            .iter()
            .any(|&id| self.vertices[id].is_above_ground());
        if visible {
            self.triangles.push(Triangle::new(p1, p2, p3));
        }
        visible
    }

    /// Registers three new vertices and appends the triangle they span.
    ///
    /// The vertices are owned by the store even when the triangle itself is
    /// dropped by the ground filter of [`MeshStore::add_triangle`].
    pub fn add_seed_triangle(&mut self, points: [Point3; 3]) -> bool {
        let [p1, p2, p3] = points.map(|p| self.add_vertex(VertexData::new(p)));
        self.push_triangle(p1, p2, p3)
    }

    /// The current working set, in insertion order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles in the working set.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Removes the whole working set and returns it.
    ///
    /// Vertices referenced by the removed triangles stay allocated.
    pub fn take_triangles(&mut self) -> Vec<Triangle> {
        std::mem::take(&mut self.triangles)
    }

    // --- Edge cache ---

    /// The edge midpoint cache.
    #[must_use]
    pub fn edge_cache(&self) -> &EdgeMidpointCache {
        &self.edges
    }

    pub(crate) fn edge_cache_mut(&mut self) -> &mut EdgeMidpointCache {
        &mut self.edges
    }

    /// Releases every vertex, triangle and cached edge.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.triangles.clear();
        self.vertices.clear();
    }
}
