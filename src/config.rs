use crate::error::{ConfigError, GeometryError, Result};
use crate::math::triangle_3d::{has_coincident_points, is_finite};
use crate::math::Point3;

/// Displacement magnitude installed by every reset.
pub const DEFAULT_INITIAL_DISPLACEMENT: f64 = 10.0;

/// Factor applied to the displacement magnitude after each subdivision level.
pub const DEFAULT_DECAY_RATIO: f64 = 0.6;

/// Corner coordinates of the four seed faces (two ground corners, then apex).
const DEFAULT_SEED_COORDS: [[[f64; 3]; 3]; 4] = [
    [[-20.0, 50.0, 0.0], [50.0, -20.0, 0.0], [50.0, 50.0, 50.0]],
    [[-10.0, -50.0, 0.0], [-50.0, -10.0, 0.0], [-50.0, -50.0, 20.0]],
    [[-50.0, 10.0, 0.0], [10.0, 50.0, 0.0], [-50.0, 50.0, 20.0]],
    [[50.0, 0.0, 0.0], [0.0, -50.0, 0.0], [50.0, -50.0, 40.0]],
];

/// The four seed triangles of the default mountain.
#[must_use]
pub fn default_seeds() -> Vec<[Point3; 3]> {
    DEFAULT_SEED_COORDS
        .into_iter()
        .map(|tri| tri.map(|[x, y, z]| Point3::new(x, y, z)))
        .collect()
}

/// Maximum random offset applied to new midpoint heights.
///
/// Always finite and non-negative, so the offset range `[-d, d]` is never
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Displacement(f64);

impl Default for Displacement {
    fn default() -> Self {
        Self(DEFAULT_INITIAL_DISPLACEMENT)
    }
}

impl Displacement {
    /// Creates a displacement magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if `magnitude` is negative or non-finite.
    pub fn new(magnitude: f64) -> std::result::Result<Self, ConfigError> {
        if magnitude.is_finite() && magnitude >= 0.0 {
            Ok(Self(magnitude))
        } else {
            Err(ConfigError::InvalidDisplacement(magnitude))
        }
    }

    /// The magnitude as a plain number.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.0
    }

    /// The magnitude for the next level. `ratio` must be a validated decay ratio.
    #[must_use]
    pub(crate) fn decayed(self, ratio: f64) -> Self {
        Self(self.0 * ratio)
    }
}

/// What happens to the edge midpoint cache between subdivision levels.
///
/// Every level creates fresh vertices, so entries from an earlier level are
/// never hit again. Both policies produce the same mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep every entry until the next reset.
    #[default]
    RetainAcrossLevels,
    /// Drop all entries at the end of each level.
    ClearEachLevel,
}

/// Parameters controlling terrain growth.
#[derive(Debug, Clone)]
pub struct TerrainConfig {
    /// Displacement magnitude installed by a reset.
    pub initial_displacement: f64,
    /// Factor applied to the displacement magnitude after each level.
    pub decay_ratio: f64,
    /// Seed of the random source. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Edge cache retention between levels.
    pub cache_policy: CachePolicy,
    /// Seed triangles installed by a reset.
    pub seeds: Vec<[Point3; 3]>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            initial_displacement: DEFAULT_INITIAL_DISPLACEMENT,
            decay_ratio: DEFAULT_DECAY_RATIO,
            seed: None,
            cache_policy: CachePolicy::default(),
            seeds: default_seeds(),
        }
    }
}

impl TerrainConfig {
    /// Sets the initial displacement magnitude.
    #[must_use]
    pub fn with_initial_displacement(mut self, magnitude: f64) -> Self {
        self.initial_displacement = magnitude;
        self
    }

    /// Sets the per-level decay ratio.
    #[must_use]
    pub fn with_decay_ratio(mut self, ratio: f64) -> Self {
        self.decay_ratio = ratio;
        self
    }

    /// Makes the random source reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the edge cache policy.
    #[must_use]
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// Replaces the seed triangles.
    #[must_use]
    pub fn with_seeds(mut self, seeds: Vec<[Point3; 3]>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Checks that the configuration can drive a terrain.
    ///
    /// # Errors
    ///
    /// Returns an error if the displacement is negative or non-finite, if the
    /// decay ratio is outside `(0, 1]`, or if a seed triangle has a
    /// non-finite coordinate, a negative height, or coincident corners.
    pub fn validate(&self) -> Result<()> {
        Displacement::new(self.initial_displacement)?;
        let r = self.decay_ratio;
        if !r.is_finite() || r <= 0.0 || r > 1.0 {
            return Err(ConfigError::InvalidDecayRatio(r).into());
        }
        for (i, [a, b, c]) in self.seeds.iter().enumerate() {
            if ![a, b, c].iter().all(|p| is_finite(p)) {
                return Err(GeometryError::NonFinite.into());
            }
            if [a, b, c].iter().any(|p| p.z < 0.0) {
                return Err(
                    GeometryError::Degenerate(format!("seed triangle {i} dips below ground"))
                        .into(),
                );
            }
            if has_coincident_points(a, b, c) {
                return Err(GeometryError::Degenerate(format!(
                    "seed triangle {i} has coincident corners"
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ReliefError;

    #[test]
    fn default_is_valid() {
        let config = TerrainConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seeds.len(), 4);
        assert_eq!(config.cache_policy, CachePolicy::RetainAcrossLevels);
        assert!(config.seed.is_none());
    }

    #[test]
    fn every_default_seed_has_a_raised_apex() {
        for [a, b, c] in default_seeds() {
            assert_eq!(a.z, 0.0);
            assert_eq!(b.z, 0.0);
            assert!(c.z > 0.0);
        }
    }

    #[test]
    fn rejects_negative_displacement() {
        let err = TerrainConfig::default()
            .with_initial_displacement(-1.0)
            .validate();
        assert!(matches!(
            err,
            Err(ReliefError::Config(ConfigError::InvalidDisplacement(_)))
        ));
    }

    #[test]
    fn zero_displacement_is_allowed() {
        let config = TerrainConfig::default().with_initial_displacement(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn displacement_rejects_negative_and_nan() {
        for magnitude in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Displacement::new(magnitude),
                    Err(ConfigError::InvalidDisplacement(_))
                ),
                "magnitude {magnitude} accepted"
            );
        }
        assert_eq!(Displacement::new(0.0).unwrap().magnitude(), 0.0);
        assert_eq!(Displacement::default().magnitude(), DEFAULT_INITIAL_DISPLACEMENT);
    }

    #[test]
    fn decayed_scales_magnitude() {
        let d = Displacement::new(10.0).unwrap().decayed(0.5);
        assert!((d.magnitude() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        for ratio in [0.0, -0.5, 1.5, f64::NAN] {
            let err = TerrainConfig::default().with_decay_ratio(ratio).validate();
            assert!(
                matches!(err, Err(ReliefError::Config(ConfigError::InvalidDecayRatio(_)))),
                "ratio {ratio} accepted"
            );
        }
    }

    #[test]
    fn rejects_degenerate_seed() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let err = TerrainConfig::default()
            .with_seeds(vec![[p, p, Point3::new(0.0, 0.0, 0.0)]])
            .validate();
        assert!(matches!(
            err,
            Err(ReliefError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn rejects_non_finite_seed() {
        let err = TerrainConfig::default()
            .with_seeds(vec![[
                Point3::new(f64::INFINITY, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 1.0),
            ]])
            .validate();
        assert!(matches!(err, Err(ReliefError::Geometry(GeometryError::NonFinite))));
    }
}
