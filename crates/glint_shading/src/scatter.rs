//! Material scattering: one bounce of a path's random walk.

use glint_core::{Material, MaterialKind};
use glint_math::{offset_ray, reflect, refract, Vec3};
use rand::{Rng, RngCore};

use crate::{fresnel, sample_cosine_hemisphere, PathSegment};

/// True if any channel of `v` is strictly positive.
#[inline]
pub fn has_positive_component(v: Vec3) -> bool {
    v.x > 0.0 || v.y > 0.0 || v.z > 0.0
}

/// Scatter a path off a surface, updating it in place.
///
/// - `position`: intersection point
/// - `normal`: unit surface normal on the side the path arrived from
/// - `outside`: whether the path arrived through the material's exterior
///
/// Emission is credited with the throughput from before this bounce, then
/// the material picks the next direction:
///
/// - **Diffuse**: cosine-weighted hemisphere sample. The cosine and the
///   sampling density cancel, leaving albedo as the only weight.
/// - **Mirror**: perfect reflection.
/// - **Dielectric**: reflection with the Fresnel probability, refraction
///   otherwise. Choosing the event with its physical probability is the
///   estimator, so throughput is not divided by it.
///
/// Every branch multiplies throughput by albedo. For mirror and dielectric
/// this is a tint rather than a normalized BRDF. The bounce budget drops by
/// one whatever happened.
pub fn scatter(
    segment: &mut PathSegment,
    position: Vec3,
    normal: Vec3,
    outside: bool,
    material: &Material,
    rng: &mut dyn RngCore,
) {
    if has_positive_component(material.emittance) {
        segment.radiance += segment.throughput * material.emittance;
    }

    // Points back along the path, away from the surface
    let in_dir = -segment.ray.direction;

    let out_dir = match material.kind {
        MaterialKind::Diffuse => sample_cosine_hemisphere(normal, rng),
        MaterialKind::Mirror => reflect(-in_dir, normal),
        MaterialKind::Dielectric => {
            let cos_theta = in_dir.dot(normal);
            let eta = if outside {
                material.index_of_refraction
            } else {
                1.0 / material.index_of_refraction
            };
            let reflectance = fresnel(cos_theta, eta);

            if rng.gen::<f32>() <= reflectance {
                reflect(-in_dir, normal)
            } else {
                // The TIR guard in fresnel() already forced reflection; None
                // here only comes from rounding at the critical angle.
                refract(-in_dir, normal, eta)
                    .map(Vec3::normalize)
                    .unwrap_or_else(|| reflect(-in_dir, normal))
            }
        }
    };

    segment.ray = offset_ray(position, normal, out_dir);
    segment.throughput *= material.albedo;
    segment.remaining_bounces = segment.remaining_bounces.saturating_sub(1);
}
