use std::collections::HashMap;

use crate::error::MeshError;
use crate::mesh::{EdgeKey, MeshStore};

/// Validates the structural invariants of the working set.
///
/// Checks that every corner resolves in the store, that each triangle has
/// three distinct corners with at least one above ground, that no vertex
/// lies below ground, and that no edge is shared by more than two triangles.
#[derive(Default)]
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn execute(&self, store: &MeshStore) -> Result<(), MeshError> {
        let mut edge_uses: HashMap<EdgeKey, usize> = HashMap::new();

        for (i, tri) in store.triangles().iter().enumerate() {
            if !tri.has_distinct_corners() {
                return Err(MeshError::InvalidTopology(format!(
                    "triangle {i} has repeated corners"
                )));
            }

            let mut raised = false;
            for id in tri.corners() {
                let z = store.vertex(id)?.point.z;
                if z < 0.0 {
                    return Err(MeshError::InvalidTopology(format!(
                        "triangle {i} has a corner below ground (z = {z})"
                    )));
                }
                raised |= z > 0.0;
            }
            if !raised {
                return Err(MeshError::InvalidTopology(format!(
                    "triangle {i} lies entirely on the ground"
                )));
            }

            for (a, b) in tri.edges() {
                let uses = edge_uses.entry(EdgeKey::new(a, b)).or_insert(0);
                *uses += 1;
                if *uses > 2 {
                    return Err(MeshError::InvalidTopology(format!(
                        "edge of triangle {i} is shared by more than two triangles"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::mesh::{VertexData, VertexId};

    fn vertex(store: &mut MeshStore, x: f64, y: f64, z: f64) -> VertexId {
        store.add_vertex(VertexData::new(Point3::new(x, y, z)))
    }

    #[test]
    fn empty_store_is_valid() {
        assert!(IsValid::new().execute(&MeshStore::new()).is_ok());
    }

    #[test]
    fn fan_of_two_is_valid() {
        let mut store = MeshStore::new();
        let a = vertex(&mut store, 0.0, 0.0, 1.0);
        let b = vertex(&mut store, 1.0, 0.0, 1.0);
        let c = vertex(&mut store, 0.0, 1.0, 1.0);
        let d = vertex(&mut store, 1.0, 1.0, 1.0);
        store.add_triangle(a, b, c).unwrap();
        store.add_triangle(c, b, d).unwrap();
        assert!(IsValid::new().execute(&store).is_ok());
    }

    #[test]
    fn repeated_corner_is_rejected() {
        let mut store = MeshStore::new();
        let a = vertex(&mut store, 0.0, 0.0, 1.0);
        let b = vertex(&mut store, 1.0, 0.0, 1.0);
        store.add_triangle(a, b, a).unwrap();
        assert!(matches!(
            IsValid::new().execute(&store),
            Err(MeshError::InvalidTopology(_))
        ));
    }

    #[test]
    fn non_manifold_edge_is_rejected() {
        let mut store = MeshStore::new();
        let a = vertex(&mut store, 0.0, 0.0, 1.0);
        let b = vertex(&mut store, 1.0, 0.0, 1.0);
        for x in [0.0, 1.0, 2.0] {
            let c = vertex(&mut store, x, 1.0, 1.0);
            store.add_triangle(a, b, c).unwrap();
        }
        assert!(matches!(
            IsValid::new().execute(&store),
            Err(MeshError::InvalidTopology(_))
        ));
    }
}
