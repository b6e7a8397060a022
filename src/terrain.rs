use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{Displacement, TerrainConfig};
use crate::error::{MeshError, Result};
use crate::mesh::{MeshStore, Triangle, VertexData, VertexId};
use crate::operations::query::{Aabb, BoundingBox, IsValid, MeshStats, Stats};
use crate::operations::{SeedMesh, Subdivide};
use crate::render::{ExportMesh, ShadedTriangle, TriangleMesh, TriangleSink};

/// A fractal mountain grown by midpoint displacement.
///
/// Owns the mesh store, the current displacement magnitude and the random
/// source. The caller drives it serially: [`Terrain::reset`] to start over,
/// [`Terrain::subdivide`] to refine, and [`Terrain::draw`] (or one of the
/// other read accessors) to render.
#[derive(Debug)]
pub struct Terrain {
    config: TerrainConfig,
    store: MeshStore,
    initial: Displacement,
    displacement: Displacement,
    level: u32,
    rng: ChaCha8Rng,
}

impl Default for Terrain {
    fn default() -> Self {
        let config = TerrainConfig::default();
        let rng = ChaCha8Rng::from_entropy();
        Self::with_rng(config, Displacement::default(), rng)
    }
}

impl Terrain {
    /// Creates a terrain from a configuration and installs the seed mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        let initial = Displacement::new(config.initial_displacement)?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self::with_rng(config, initial, rng))
    }

    fn with_rng(config: TerrainConfig, initial: Displacement, rng: ChaCha8Rng) -> Self {
        let mut terrain = Self {
            config,
            initial,
            displacement: initial,
            store: MeshStore::new(),
            level: 0,
            rng,
        };
        terrain.reset();
        terrain
    }

    /// Discards the whole mesh and reinstalls the seed triangles.
    ///
    /// Restores the initial displacement magnitude and level 0. The random
    /// source keeps its state, so successive growth runs differ.
    pub fn reset(&mut self) {
        self.store.clear();
        let kept = SeedMesh::new(&self.config.seeds).execute(&mut self.store);
        self.displacement = self.initial;
        self.level = 0;
        tracing::debug!(
            seeds = self.config.seeds.len(),
            kept,
            displacement = self.displacement.magnitude(),
            "terrain reset"
        );
    }

    /// Refines every triangle of the working set once.
    ///
    /// The new midpoints are displaced by at most the current magnitude,
    /// which then decays by the configured ratio.
    pub fn subdivide(&mut self) {
        let parents = Subdivide::new(self.displacement)
            .with_cache_policy(self.config.cache_policy)
            .execute(&mut self.store, &mut self.rng);
        self.displacement = self.displacement.decayed(self.config.decay_ratio);
        self.level += 1;
        tracing::debug!(
            level = self.level,
            parents,
            triangles = self.store.triangle_count(),
            vertices = self.store.vertex_count(),
            cached_edges = self.store.edge_cache().len(),
            displacement = self.displacement.magnitude(),
            "terrain subdivided"
        );
    }

    /// Calls [`Terrain::subdivide`] `levels` times.
    pub fn subdivide_n(&mut self, levels: u32) {
        for _ in 0..levels {
            self.subdivide();
        }
    }

    /// The configuration this terrain was built from.
    #[must_use]
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// The underlying mesh store.
    #[must_use]
    pub fn store(&self) -> &MeshStore {
        &self.store
    }

    /// The working set, in drawing order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        self.store.triangles()
    }

    /// Looks up a vertex of the current growth run.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID predates the last reset.
    pub fn vertex(&self, id: VertexId) -> std::result::Result<&VertexData, MeshError> {
        self.store.vertex(id)
    }

    /// Displacement magnitude the next subdivision will use.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.displacement.magnitude()
    }

    /// Number of subdivisions since the last reset.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Iterates over the working set resolved for drawing.
    pub fn shaded_triangles(&self) -> impl Iterator<Item = ShadedTriangle> + '_ {
        self.store
            .triangles()
            .iter()
            .map(|tri| ShadedTriangle::resolve(&self.store, tri))
    }

    /// Feeds every triangle of the working set to `sink`, in order.
    pub fn draw<S: TriangleSink + ?Sized>(&self, sink: &mut S) {
        for tri in self.shaded_triangles() {
            sink.triangle(&tri);
        }
    }

    /// Exports the working set as an indexed mesh.
    #[must_use]
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        ExportMesh::new().execute(&self.store)
    }

    /// Bounding box of the working set, or `None` if it is empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        BoundingBox::new().execute(&self.store)
    }

    /// Size summary of the mesh.
    #[must_use]
    pub fn stats(&self) -> MeshStats {
        Stats::new().execute(&self.store)
    }

    /// Checks the structural invariants of the working set.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> std::result::Result<(), MeshError> {
        IsValid::new().execute(&self.store)
    }
}
