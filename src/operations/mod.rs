mod midpoint;
pub mod query;
pub mod seed;
pub mod subdivide;

pub(crate) use midpoint::Midpoint;
pub use seed::SeedMesh;
pub use subdivide::Subdivide;
