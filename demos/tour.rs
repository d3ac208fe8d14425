//! Walks through the vector API and prints each result.
//!
//! Usage:
//! ```text
//! cargo run --example tour
//! RUST_LOG=vecmath=trace cargo run --example tour   # show degenerate-case events
//! ```

use tracing::info;
use vecmath::math::geometry::{clamp, deproject, min_of, project, reflect, refract, slerp};
use vecmath::{Vector2, Vector3};

fn main() -> vecmath::Result<()> {
    // Default: WARN for everything, INFO for the tour.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vecmath=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let p = Vector2::new(3.0, 4.0);
    info!(magnitude = p.magnitude(), normalized = ?p.normalize(), "2d");

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(0.0, 0.0, 2.0);
    info!(dot = a.dot(b), cross = ?a.cross(b), "products");
    info!(project = ?project(a, b), deproject = ?deproject(a, b), "projection");

    let incident = Vector3::new(1.0, -1.0, 0.0).normalize();
    info!(reflect = ?reflect(incident, Vector3::Y), "reflection");
    info!(glass = ?refract(incident, Vector3::Y, 1.0 / 1.5), "refraction");
    info!(tir = ?refract(Vector3::X, Vector3::Y, 2.0), "total internal reflection");

    info!(clamped = ?clamp(a, 1.0), slerp = ?slerp(Vector3::X, Vector3::Y * 2.0, 0.5), "shaping");

    let lowest = min_of(&[a, b, -a])?;
    info!(?lowest, "component-wise minimum");

    // Degenerate inputs resolve to the zero vector.
    info!(normalized = ?Vector3::ZERO.normalize(), "zero vector");

    Ok(())
}
