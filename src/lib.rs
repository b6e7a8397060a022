pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod render;
pub mod terrain;

pub use config::{CachePolicy, Displacement, TerrainConfig};
pub use error::{ReliefError, Result};
pub use terrain::Terrain;
