// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod basis;
mod optics;
mod ray;

pub use basis::{orthonormal_basis, SQRT_OF_ONE_THIRD};
pub use optics::{offset_ray, reflect, refract, RAY_EPSILON};
pub use ray::Ray;
