use crate::math::Point3;
use crate::mesh::MeshStore;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Computes the axis-aligned bounding box of the working set.
///
/// Vertices no longer referenced by any triangle are ignored.
#[derive(Default)]
pub struct BoundingBox;

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning `None` if the working set is empty.
    #[must_use]
    pub fn execute(&self, store: &MeshStore) -> Option<Aabb> {
        let mut points = store
            .triangles()
            .iter()
            .flat_map(|t| t.corners())
            .map(|id| store.point(id));
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (min.inf(&p), max.sup(&p))
        });
        Some(Aabb { min, max })
    }
}
