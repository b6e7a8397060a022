use rand::Rng;

use crate::config::{CachePolicy, Displacement};
use crate::mesh::MeshStore;

use super::Midpoint;

/// Refines the working set of a mesh store by one level.
///
/// Every triangle `(p1, p2, p3)` present when the operation starts is
/// replaced by four children built on the shared edge midpoints:
///
/// ```text
///              p3
///              /\
///             /  \
///        m31 /____\ m23
///           /\    /\
///          /  \  /  \
///         /____\/____\
///       p1     m12    p2
/// ```
///
/// Children are appended in the order `(m12, m23, m31)`, `(p1, m12, m31)`,
/// `(m12, p2, m23)`, `(m31, m23, p3)`, each subject to the ground filter.
/// Children produced by this call are not refined again by it.
pub struct Subdivide {
    displacement: Displacement,
    cache_policy: CachePolicy,
}

impl Subdivide {
    /// Creates a new `Subdivide` operation with the given displacement magnitude.
    #[must_use]
    pub fn new(displacement: Displacement) -> Self {
        Self {
            displacement,
            cache_policy: CachePolicy::default(),
        }
    }

    /// Sets what happens to the edge cache once the level is complete.
    #[must_use]
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// Executes the subdivision, returning the number of parent triangles.
    ///
    /// Every triangle in the working set must reference vertices of `store`.
    pub fn execute<R: Rng>(&self, store: &mut MeshStore, rng: &mut R) -> usize {
        let parents = store.take_triangles();

        for tri in &parents {
            debug_assert!(
                tri.has_distinct_corners(),
                "triangle with repeated corners in working set: {tri:?}"
            );
            let m12 = Midpoint::new(tri.p1, tri.p2, self.displacement).execute(store, rng);
            let m23 = Midpoint::new(tri.p2, tri.p3, self.displacement).execute(store, rng);
            let m31 = Midpoint::new(tri.p3, tri.p1, self.displacement).execute(store, rng);

            store.push_triangle(m12, m23, m31);
            store.push_triangle(tri.p1, m12, m31);
            store.push_triangle(m12, tri.p2, m23);
            store.push_triangle(m31, m23, tri.p3);
        }

        if self.cache_policy == CachePolicy::ClearEachLevel {
            tracing::trace!(edges = store.edge_cache().len(), "clearing edge cache");
            store.edge_cache_mut().clear();
        }

        parents.len()
    }
}
