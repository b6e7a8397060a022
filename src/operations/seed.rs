use crate::math::Point3;
use crate::mesh::MeshStore;

/// Installs a set of seed triangles into a mesh store.
///
/// Each seed gets three fresh vertices; seeds never share corners.
pub struct SeedMesh<'a> {
    seeds: &'a [[Point3; 3]],
}

impl<'a> SeedMesh<'a> {
    /// Creates a new `SeedMesh` operation.
    #[must_use]
    pub fn new(seeds: &'a [[Point3; 3]]) -> Self {
        Self { seeds }
    }

    /// Executes the seeding, returning how many seeds passed the ground filter.
    pub fn execute(&self, store: &mut MeshStore) -> usize {
        let mut kept = 0;
        for &points in self.seeds {
            if store.add_seed_triangle(points) {
                kept += 1;
            }
        }
        kept
    }
}
