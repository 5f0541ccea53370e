//! Glint Shading - Monte Carlo surface scattering.
//!
//! One call to [`scatter`] performs one bounce of a path's random walk:
//! it credits emission, picks a scattering event from the surface material,
//! spawns the next ray and updates the path's throughput and bounce budget.
//!
//! Intersection testing, image accumulation and scheduling live elsewhere.
//! [`shade_segments`] is the data-parallel entry point a trace loop calls
//! once per bounce.

mod fresnel;
mod pass;
mod path;
mod sampling;
mod scatter;

pub use fresnel::fresnel;
pub use pass::{shade_segments, ShadeStats, SurfaceHit};
pub use path::PathSegment;
pub use sampling::{path_rng, sample_cosine_hemisphere};
pub use scatter::{has_positive_component, scatter};

/// Re-export the types callers need alongside the shading entry points
pub use glint_core::{Color, Material, MaterialId, MaterialKind, MaterialLibrary, RenderSettings};
pub use glint_math::{Ray, Vec3};
