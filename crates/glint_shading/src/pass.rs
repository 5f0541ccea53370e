//! Data-parallel shading pass over a batch of paths.
//!
//! The trace loop intersects every live path, hands the results here, and
//! gets back paths that are ready for the next intersection round. Each path
//! is shaded independently with its own random stream, using rayon to spread
//! the batch across threads.

use glint_core::{MaterialId, MaterialLibrary, RenderSettings};
use glint_math::Vec3;
use rayon::prelude::*;

use crate::{path_rng, scatter, PathSegment};

/// Surface information for a path whose ray hit something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the hit
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit normal on the side the ray arrived from
    pub normal: Vec3,
    /// Whether the ray arrived through the material's exterior
    pub outside: bool,
    /// Material at the intersection point
    pub material: MaterialId,
}

/// What a shading pass did to its batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadeStats {
    /// Paths that scattered off a surface
    pub scattered: usize,
    /// Paths retired because their ray missed the scene
    pub escaped: usize,
    /// Paths retired because their hit named a material the library lacks
    pub missing_material: usize,
}

impl ShadeStats {
    fn merge(self, other: Self) -> Self {
        Self {
            scattered: self.scattered + other.scattered,
            escaped: self.escaped + other.escaped,
            missing_material: self.missing_material + other.missing_material,
        }
    }
}

/// Shade one bounce for every live path in `segments`.
///
/// `hits[i]` is the intersection for `segments[i]`, or `None` if its ray
/// escaped. Paths that already ran out of bounces are skipped. `depth` is the
/// bounce number of this pass and, with `iteration` and the path's pixel
/// index, selects the path's random stream.
///
/// # Panics
///
/// Panics if `segments` and `hits` differ in length.
pub fn shade_segments(
    segments: &mut [PathSegment],
    hits: &[Option<SurfaceHit>],
    materials: &MaterialLibrary,
    iteration: u32,
    depth: u32,
    settings: &RenderSettings,
) -> ShadeStats {
    assert_eq!(
        segments.len(),
        hits.len(),
        "every path segment needs an intersection slot"
    );

    let stats = segments
        .par_iter_mut()
        .zip(hits.par_iter())
        .map(|(segment, hit)| {
            if segment.is_terminated() {
                return ShadeStats::default();
            }

            let Some(hit) = hit else {
                segment.terminate();
                return ShadeStats { escaped: 1, ..Default::default() };
            };

            let Some(material) = materials.get(hit.material) else {
                segment.terminate();
                return ShadeStats { missing_material: 1, ..Default::default() };
            };

            let mut rng = path_rng(settings.seed, iteration, segment.pixel_index, depth);
            scatter(segment, hit.position, hit.normal, hit.outside, material, &mut rng);
            ShadeStats { scattered: 1, ..Default::default() }
        })
        .reduce(ShadeStats::default, ShadeStats::merge);

    if stats.missing_material > 0 {
        log::warn!(
            "{} paths hit unknown materials and were terminated",
            stats.missing_material
        );
    }
    log::debug!(
        "Shaded iteration {} depth {}: {} scattered, {} escaped",
        iteration,
        depth,
        stats.scattered,
        stats.escaped
    );

    stats
}
