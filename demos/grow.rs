//! Grows a mountain level by level and prints a summary of each step.
//!
//! Usage:
//! ```text
//! cargo run --example grow                 # 6 levels, random mountain
//! cargo run --example grow -- 8 42         # 8 levels, seed 42
//! RUST_LOG=relief=debug cargo run --example grow
//! ```

use relief::{Terrain, TerrainConfig};

fn main() -> relief::Result<()> {
    // Default: WARN for everything, INFO for the demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=relief=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("grow=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let levels: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let mut config = TerrainConfig::default();
    if let Some(seed) = args.next().and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let mut terrain = Terrain::new(config)?;
    for _ in 0..levels {
        terrain.subdivide();
        let stats = terrain.stats();
        tracing::info!(
            level = terrain.level(),
            triangles = stats.triangles,
            vertices = stats.vertices,
            max_height = stats.max_height,
            "grown"
        );
    }
    terrain.validate()?;

    let mut shade_sum = 0.0;
    let mut count = 0_u32;
    terrain.draw(&mut |t: &relief::render::ShadedTriangle| {
        shade_sum += t.shade;
        count += 1;
    });
    let mesh = terrain.to_triangle_mesh();
    println!(
        "level {}: {} triangles, {} shared vertices, mean shade {:.3}",
        terrain.level(),
        mesh.triangle_count(),
        mesh.vertices.len(),
        if count == 0 { 0.0 } else { shade_sum / f64::from(count) },
    );
    if let Some(aabb) = terrain.bounding_box() {
        println!("bounds {:?} .. {:?}", aabb.min, aabb.max);
    }
    Ok(())
}
