use thiserror::Error;

/// Top-level error type for the relief terrain engine.
#[derive(Debug, Error)]
pub enum ReliefError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors raised while validating a [`crate::config::TerrainConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("initial displacement {0} must be finite and non-negative")]
    InvalidDisplacement(f64),

    #[error("decay ratio {0} must be finite and in (0, 1]")]
    InvalidDecayRatio(f64),
}

/// Errors related to seed geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point has a non-finite coordinate")]
    NonFinite,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the mesh store.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("vertex not found")]
    VertexNotFound,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Convenience type alias for results using [`ReliefError`].
pub type Result<T> = std::result::Result<T, ReliefError>;
