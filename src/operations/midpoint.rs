use rand::Rng;

use crate::config::Displacement;
use crate::math::triangle_3d::midpoint;
use crate::mesh::{MeshStore, VertexData, VertexId};

/// Resolves the shared midpoint vertex of an edge, creating it on first use.
///
/// A new midpoint above the ground plane is raised or lowered by a uniform
/// offset in `[-displacement, displacement]` and clamped at `z = 0`.
/// Midpoints on or below the ground plane keep their interpolated height.
pub(crate) struct Midpoint {
    a: VertexId,
    b: VertexId,
    displacement: Displacement,
}

impl Midpoint {
    /// Creates a new `Midpoint` operation for the edge `a`–`b`.
    #[must_use]
    pub(crate) fn new(a: VertexId, b: VertexId, displacement: Displacement) -> Self {
        Self { a, b, displacement }
    }

    /// Executes the lookup, returning the midpoint's ID.
    ///
    /// Both endpoints must belong to `store`.
    pub(crate) fn execute<R: Rng>(&self, store: &mut MeshStore, rng: &mut R) -> VertexId {
        if let Some(id) = store.edge_cache().get(self.a, self.b) {
            return id;
        }

        let mut point = midpoint(&store.point(self.a), &store.point(self.b));
        if point.z > 0.0 {
            let d = self.displacement.magnitude();
            point.z += rng.gen_range(-d..=d);
            if point.z < 0.0 {
                point.z = 0.0;
            }
        }

        let id = store.add_vertex(VertexData::new(point));
        store.edge_cache_mut().insert(self.a, self.b, id);
        id
    }
}
