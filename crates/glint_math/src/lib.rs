// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{normalize, reflect};
